use crate::ports::{
    LocalResolverFactory, RemoteResolverFactory, ResolvedRecords, Resolver, ResolverParams,
};
use dns_dispatch_domain::{
    Config, DnsRecord, Domain, DomainError, FamilyStrategy, RecordType, Timeout,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Fixed parameters of the dispatcher, resolved once from configuration.
#[derive(Debug, Clone)]
pub struct DispatcherSettings {
    /// Address of the local forwarding resolver; the port comes per call
    pub loopback_address: IpAddr,
    pub doh_endpoint: Arc<str>,
    pub default_timeout: Timeout,
    pub family_strategy: FamilyStrategy,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            loopback_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            doh_endpoint: Arc::from("https://dns.quad9.net/dns-query"),
            default_timeout: Timeout::default(),
            family_strategy: FamilyStrategy::Sequential,
        }
    }
}

impl From<&Config> for DispatcherSettings {
    fn from(config: &Config) -> Self {
        Self {
            loopback_address: config.local.address,
            doh_endpoint: Arc::from(config.remote.endpoint.as_str()),
            default_timeout: config.query.default_timeout(),
            family_strategy: config.query.family_strategy,
        }
    }
}

/// Which transport a call goes through.
#[derive(Debug, Clone)]
enum Route {
    Local(SocketAddr),
    Remote(Arc<str>),
}

/// Entry point for every lookup the client issues.
///
/// Each public method picks a transport; the dispatcher then normalizes the
/// input, asks the matching factory for fresh resolvers (one per record type)
/// and merges the results. It never retries, never falls back to the other
/// transport and never rewrites a resolver error.
pub struct ResolutionDispatcher {
    local_factory: Arc<dyn LocalResolverFactory>,
    remote_factory: Arc<dyn RemoteResolverFactory>,
    settings: DispatcherSettings,
}

impl ResolutionDispatcher {
    pub fn new(
        local_factory: Arc<dyn LocalResolverFactory>,
        remote_factory: Arc<dyn RemoteResolverFactory>,
        settings: DispatcherSettings,
    ) -> Self {
        Self {
            local_factory,
            remote_factory,
            settings,
        }
    }

    /// Forward lookup through the loopback UDP resolver listening on `port`.
    #[instrument(skip(self))]
    pub async fn resolve_domain_via_local_transport(
        &self,
        domain: &str,
        include_ipv6: bool,
        port: u16,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let route = Route::Local(SocketAddr::new(self.settings.loopback_address, port));
        self.resolve_forward(route, domain, include_ipv6, timeout).await
    }

    /// Forward lookup through the configured DoH endpoint.
    #[instrument(skip(self))]
    pub async fn resolve_domain_via_remote_transport(
        &self,
        domain: &str,
        include_ipv6: bool,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let route = Route::Remote(Arc::clone(&self.settings.doh_endpoint));
        self.resolve_forward(route, domain, include_ipv6, timeout).await
    }

    #[instrument(skip(self))]
    pub async fn reverse_resolve_via_local_transport(
        &self,
        ip: &str,
        port: u16,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let route = Route::Local(SocketAddr::new(self.settings.loopback_address, port));
        self.reverse(route, ip, timeout).await
    }

    #[instrument(skip(self))]
    pub async fn reverse_resolve_via_remote_transport(
        &self,
        ip: &str,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let route = Route::Remote(Arc::clone(&self.settings.doh_endpoint));
        self.reverse(route, ip, timeout).await
    }

    async fn resolve_forward(
        &self,
        route: Route,
        raw_domain: &str,
        include_ipv6: bool,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let domain = Domain::normalize(raw_domain)?;
        let timeout = Timeout::or_default(timeout, self.settings.default_timeout);

        let ipv4 = self.create_resolver(&route, RecordType::A, timeout);

        if !include_ipv6 {
            let result = ipv4.resolve(&domain).await?;
            debug!(
                domain = %domain,
                records = result.as_ref().map_or(0, Vec::len),
                "IPv4 lookup complete"
            );
            return Ok(result);
        }

        let (ipv4_records, ipv6_records) = match self.settings.family_strategy {
            FamilyStrategy::Sequential => {
                let ipv4_records = ipv4.resolve(&domain).await?;
                let ipv6 = self.create_resolver(&route, RecordType::AAAA, timeout);
                let ipv6_records = ipv6.resolve(&domain).await?;
                (ipv4_records, ipv6_records)
            }
            FamilyStrategy::Parallel => {
                let ipv6 = self.create_resolver(&route, RecordType::AAAA, timeout);
                futures::future::try_join(ipv4.resolve(&domain), ipv6.resolve(&domain)).await?
            }
        };

        let merged = merge_families(ipv4_records, ipv6_records);
        debug!(
            domain = %domain,
            records = merged.len(),
            strategy = ?self.settings.family_strategy,
            "Dual-family lookup complete"
        );

        Ok(Some(merged))
    }

    async fn reverse(
        &self,
        route: Route,
        ip: &str,
        timeout: Option<Timeout>,
    ) -> Result<ResolvedRecords, DomainError> {
        let timeout = Timeout::or_default(timeout, self.settings.default_timeout);
        let resolver = self.create_resolver(&route, RecordType::PTR, timeout);

        let result = resolver.reverse_resolve(ip).await?;
        debug!(
            ip = %ip,
            records = result.as_ref().map_or(0, Vec::len),
            "Reverse lookup complete"
        );
        Ok(result)
    }

    fn create_resolver(
        &self,
        route: &Route,
        record_type: RecordType,
        timeout: Timeout,
    ) -> Box<dyn Resolver> {
        match route {
            Route::Local(server) => self.local_factory.create_udp_resolver(ResolverParams {
                server: *server,
                record_type,
                timeout,
            }),
            Route::Remote(endpoint) => self.remote_factory.create_doh_resolver(ResolverParams {
                server: Arc::clone(endpoint),
                record_type,
                timeout,
            }),
        }
    }
}

/// IPv4 records first, then IPv6; a family without an answer adds nothing.
fn merge_families(ipv4: ResolvedRecords, ipv6: ResolvedRecords) -> Vec<DnsRecord> {
    let mut merged = ipv4.unwrap_or_default();
    merged.extend(ipv6.unwrap_or_default());
    merged
}
