use async_trait::async_trait;
use dns_dispatch_domain::{DnsRecord, Domain, DomainError};

/// `None` means the query completed without usable records, or that the
/// family was never queried. It is not an error.
pub type ResolvedRecords = Option<Vec<DnsRecord>>;

/// A resolver bound to one server, one record type and one timeout.
///
/// Instances are built per call by a factory and dropped afterwards.
/// Transport failures (timeout, unreachable server, undecodable reply) are
/// returned as `Err`; "no answer" is `Ok(None)`.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, domain: &Domain) -> Result<ResolvedRecords, DomainError>;

    /// PTR lookup. `ip` is passed through as given; validating it is up to
    /// the implementation.
    async fn reverse_resolve(&self, ip: &str) -> Result<ResolvedRecords, DomainError>;
}
