use dns_dispatch_application::services::{DispatcherSettings, ResolutionDispatcher};
use dns_dispatch_domain::Config;
use dns_dispatch_infrastructure::dns::{DohResolverFactory, UdpResolverFactory};
use std::sync::Arc;
use tracing::debug;

/// Wires the dispatcher to the UDP and DoH resolver factories.
pub fn build_dispatcher(config: &Config) -> ResolutionDispatcher {
    let settings = DispatcherSettings::from(config);

    debug!(
        loopback = %settings.loopback_address,
        endpoint = %settings.doh_endpoint,
        default_timeout = %settings.default_timeout,
        "Building resolution dispatcher"
    );

    ResolutionDispatcher::new(
        Arc::new(UdpResolverFactory::new()),
        Arc::new(DohResolverFactory::new()),
        settings,
    )
}
