use async_trait::async_trait;
use dns_dispatch_application::ports::{
    DohResolverParams, LocalResolverFactory, RemoteResolverFactory, ResolvedRecords, Resolver,
    UdpResolverParams,
};
use dns_dispatch_domain::{DnsRecord, Domain, DomainError, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Scripted outcomes
// ============================================================================

#[derive(Clone)]
pub enum Outcome {
    Records(ResolvedRecords),
    Timeout,
}

impl Outcome {
    pub fn none() -> Self {
        Outcome::Records(None)
    }

    pub fn records(records: Vec<DnsRecord>) -> Self {
        Outcome::Records(Some(records))
    }
}

/// Resolver construction as seen by the factory
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Udp(UdpResolverParams),
    Doh(DohResolverParams),
}

impl Created {
    pub fn record_type(&self) -> RecordType {
        match self {
            Created::Udp(p) => p.record_type,
            Created::Doh(p) => p.record_type,
        }
    }

    pub fn timeout_secs(&self) -> u64 {
        match self {
            Created::Udp(p) => p.timeout.as_secs(),
            Created::Doh(p) => p.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Resolve(RecordType, String),
    ReverseResolve(RecordType, String),
}

#[derive(Default)]
struct Journal {
    created: Vec<Created>,
    invoked: Vec<Invocation>,
    finished: Vec<RecordType>,
}

// ============================================================================
// Factory implementing both transports
// ============================================================================

/// Builds scripted resolvers and records every construction and call.
#[derive(Clone, Default)]
pub struct StubFactory {
    outcomes: Arc<Mutex<HashMap<RecordType, Outcome>>>,
    delays: Arc<Mutex<HashMap<RecordType, Duration>>>,
    journal: Arc<Mutex<Journal>>,
}

impl StubFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, record_type: RecordType, outcome: Outcome) -> Self {
        self.outcomes.lock().unwrap().insert(record_type, outcome);
        self
    }

    pub fn with_delay(self, record_type: RecordType, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(record_type, delay);
        self
    }

    pub fn created(&self) -> Vec<Created> {
        self.journal.lock().unwrap().created.clone()
    }

    pub fn invoked(&self) -> Vec<Invocation> {
        self.journal.lock().unwrap().invoked.clone()
    }

    /// Record types in the order their calls returned
    pub fn finished(&self) -> Vec<RecordType> {
        self.journal.lock().unwrap().finished.clone()
    }

    fn build(&self, record_type: RecordType, created: Created) -> Box<dyn Resolver> {
        self.journal.lock().unwrap().created.push(created);
        Box::new(StubResolver {
            record_type,
            outcome: self
                .outcomes
                .lock()
                .unwrap()
                .get(&record_type)
                .cloned()
                .unwrap_or_else(Outcome::none),
            delay: self.delays.lock().unwrap().get(&record_type).copied(),
            journal: Arc::clone(&self.journal),
        })
    }
}

impl LocalResolverFactory for StubFactory {
    fn create_udp_resolver(&self, params: UdpResolverParams) -> Box<dyn Resolver> {
        self.build(params.record_type, Created::Udp(params))
    }
}

impl RemoteResolverFactory for StubFactory {
    fn create_doh_resolver(&self, params: DohResolverParams) -> Box<dyn Resolver> {
        self.build(params.record_type, Created::Doh(params))
    }
}

struct StubResolver {
    record_type: RecordType,
    outcome: Outcome,
    delay: Option<Duration>,
    journal: Arc<Mutex<Journal>>,
}

impl StubResolver {
    async fn answer(&self, invocation: Invocation) -> Result<ResolvedRecords, DomainError> {
        self.journal.lock().unwrap().invoked.push(invocation);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.journal.lock().unwrap().finished.push(self.record_type);

        match &self.outcome {
            Outcome::Records(records) => Ok(records.clone()),
            Outcome::Timeout => Err(DomainError::TransportTimeout {
                server: "stub".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Resolver for StubResolver {
    async fn resolve(&self, domain: &Domain) -> Result<ResolvedRecords, DomainError> {
        self.answer(Invocation::Resolve(self.record_type, domain.to_string()))
            .await
    }

    async fn reverse_resolve(&self, ip: &str) -> Result<ResolvedRecords, DomainError> {
        self.answer(Invocation::ReverseResolve(self.record_type, ip.to_string()))
            .await
    }
}

// ============================================================================
// Record fixtures
// ============================================================================

pub fn a_record(domain: &str, ip: &str) -> DnsRecord {
    DnsRecord::address(domain, ip.parse::<IpAddr>().unwrap(), 300)
}

pub fn aaaa_record(domain: &str, ip: &str) -> DnsRecord {
    DnsRecord::address(domain, ip.parse::<IpAddr>().unwrap(), 300)
}

pub fn ptr_record(name: &str, target: &str) -> DnsRecord {
    DnsRecord::pointer(name, target, 300)
}
