use super::record_type_map::RecordTypeMapper;
use dns_dispatch_domain::{DnsRecord, DomainError, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answers of the requested type, in answer-section order
    pub records: Vec<DnsRecord>,

    /// Answers of other types (CNAME links and the like)
    pub skipped: usize,
}

impl DnsResponse {
    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.records.is_empty()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }

    /// Records when the server answered NOERROR with data, `None` otherwise.
    pub fn into_records(self) -> Option<Vec<DnsRecord>> {
        if self.rcode == ResponseCode::NoError && !self.records.is_empty() {
            Some(self.records)
        } else {
            None
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire-format response, keeping answers of `expected` type.
    pub fn parse(response_bytes: &[u8], expected: RecordType) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut records = Vec::with_capacity(message.answers().len().min(8));
        let mut skipped = 0usize;

        for record in message.answers() {
            let ttl = record.ttl();
            let owner = record.name().to_utf8();

            let parsed = match record.data() {
                RData::A(a) => Some(DnsRecord::address(owner, IpAddr::V4(a.0), ttl)),
                RData::AAAA(aaaa) => Some(DnsRecord::address(owner, IpAddr::V6(aaaa.0), ttl)),
                RData::PTR(ptr) => Some(DnsRecord::pointer(owner, ptr.to_utf8(), ttl)),
                _ => None,
            };

            match parsed {
                Some(parsed) if parsed.record_type == expected => {
                    records.push(parsed);
                }
                _ => {
                    debug!(
                        record_type = ?record.record_type(),
                        supported = RecordTypeMapper::is_supported(record.record_type()),
                        "Skipping answer of another type"
                    );
                    skipped += 1;
                }
            }
        }

        debug!(
            rcode = Self::rcode_to_status(rcode),
            records = records.len(),
            skipped = skipped,
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            records,
            skipped,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
