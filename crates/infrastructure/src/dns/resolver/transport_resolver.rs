use crate::dns::forwarding::{parse_ip, MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use dns_dispatch_application::ports::{ResolvedRecords, Resolver};
use dns_dispatch_domain::{Domain, DomainError, RecordType, Timeout};
use std::time::Instant;
use tracing::{debug, warn};

/// Sends one query over one transport and decodes the answer.
pub struct TransportResolver {
    transport: Transport,
    record_type: RecordType,
    timeout: Timeout,
}

impl TransportResolver {
    pub fn new(transport: Transport, record_type: RecordType, timeout: Timeout) -> Self {
        Self {
            transport,
            record_type,
            timeout,
        }
    }

    async fn exchange(
        &self,
        query_id: u16,
        query_bytes: &[u8],
        expected: RecordType,
    ) -> Result<ResolvedRecords, DomainError> {
        let start = Instant::now();

        let transport_response = self
            .transport
            .send(query_bytes, self.timeout.as_duration())
            .await?;

        let response = ResponseParser::parse(&transport_response.bytes, expected)?;

        if response.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {} from {}",
                response.id,
                query_id,
                self.transport.server()
            )));
        }

        if response.truncated {
            warn!(
                server = %self.transport.server(),
                protocol = transport_response.protocol_used,
                "Response truncated (TC bit), using partial answer"
            );
        }

        if response.is_server_error() {
            warn!(
                server = %self.transport.server(),
                rcode = ResponseParser::rcode_to_status(response.rcode),
                "Server could not answer"
            );
        } else if response.is_nxdomain() {
            debug!(server = %self.transport.server(), "Name does not exist");
        } else if response.is_nodata() {
            debug!(
                server = %self.transport.server(),
                skipped = response.skipped,
                "No records of the requested type"
            );
        }

        debug!(
            server = %self.transport.server(),
            protocol = transport_response.protocol_used,
            rcode = ResponseParser::rcode_to_status(response.rcode),
            records = response.records.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Query answered"
        );

        Ok(response.into_records())
    }
}

#[async_trait]
impl Resolver for TransportResolver {
    async fn resolve(&self, domain: &Domain) -> Result<ResolvedRecords, DomainError> {
        let (query_id, query_bytes) =
            MessageBuilder::build_query(domain.as_str(), &self.record_type)?;

        debug!(
            domain = %domain,
            record_type = %self.record_type,
            timeout_secs = self.timeout.as_secs(),
            protocol = self.transport.protocol_name(),
            "Resolving"
        );

        self.exchange(query_id, &query_bytes, self.record_type).await
    }

    async fn reverse_resolve(&self, ip: &str) -> Result<ResolvedRecords, DomainError> {
        let address = parse_ip(ip)?;
        let (query_id, query_bytes) = MessageBuilder::build_reverse_query(address)?;

        debug!(
            ip = %address,
            timeout_secs = self.timeout.as_secs(),
            protocol = self.transport.protocol_name(),
            "Reverse resolving"
        );

        self.exchange(query_id, &query_bytes, RecordType::PTR).await
    }
}
