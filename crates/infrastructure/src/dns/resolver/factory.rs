use super::TransportResolver;
use crate::dns::transport::{https::HttpsTransport, udp::UdpTransport, Transport};
use dns_dispatch_application::ports::{
    DohResolverParams, LocalResolverFactory, RemoteResolverFactory, Resolver, UdpResolverParams,
};
use tracing::debug;

/// Builds UDP resolvers aimed at the loopback forwarder.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpResolverFactory;

impl UdpResolverFactory {
    pub fn new() -> Self {
        Self
    }
}

impl LocalResolverFactory for UdpResolverFactory {
    fn create_udp_resolver(&self, params: UdpResolverParams) -> Box<dyn Resolver> {
        debug!(
            server = %params.server,
            record_type = %params.record_type,
            timeout_secs = params.timeout.as_secs(),
            "Creating UDP resolver"
        );

        Box::new(TransportResolver::new(
            Transport::Udp(UdpTransport::new(params.server)),
            params.record_type,
            params.timeout,
        ))
    }
}

/// Builds DoH resolvers aimed at the configured endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct DohResolverFactory;

impl DohResolverFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteResolverFactory for DohResolverFactory {
    fn create_doh_resolver(&self, params: DohResolverParams) -> Box<dyn Resolver> {
        debug!(
            endpoint = %params.server,
            record_type = %params.record_type,
            timeout_secs = params.timeout.as_secs(),
            "Creating DoH resolver"
        );

        Box::new(TransportResolver::new(
            Transport::Https(HttpsTransport::new(params.server)),
            params.record_type,
            params.timeout,
        ))
    }
}
