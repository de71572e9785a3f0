use super::resolver::Resolver;
use dns_dispatch_domain::{RecordType, Timeout};
use std::net::SocketAddr;
use std::sync::Arc;

/// Configuration tuple a resolver instance is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverParams<S> {
    pub server: S,
    pub record_type: RecordType,
    pub timeout: Timeout,
}

/// Loopback resolver address including the caller-supplied port.
pub type UdpResolverParams = ResolverParams<SocketAddr>;

/// DoH endpoint URL.
pub type DohResolverParams = ResolverParams<Arc<str>>;

/// Builds resolvers that speak plain UDP to a local forwarding resolver.
pub trait LocalResolverFactory: Send + Sync {
    fn create_udp_resolver(&self, params: UdpResolverParams) -> Box<dyn Resolver>;
}

/// Builds resolvers that speak DNS-over-HTTPS to a remote endpoint.
pub trait RemoteResolverFactory: Send + Sync {
    fn create_doh_resolver(&self, params: DohResolverParams) -> Box<dyn Resolver>;
}
