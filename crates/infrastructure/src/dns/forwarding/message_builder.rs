//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.
//! Both transports carry the same RFC 1035 message; only the framing around
//! it differs.

use super::record_type_map::RecordTypeMapper;
use super::reverse_name::reverse_name;
use dns_dispatch_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    ///
    /// Returns the message ID together with the bytes so the caller can
    /// match the response.
    pub fn build_query(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        Self::build(name, RecordTypeMapper::to_hickory(record_type))
    }

    /// Build a PTR query for the reverse-mapping name of `ip`
    pub fn build_reverse_query(ip: IpAddr) -> Result<(u16, Vec<u8>), DomainError> {
        let reverse = reverse_name(ip);
        let name = Name::from_str(&reverse).map_err(|e| {
            DomainError::InvalidIpAddress(format!("Invalid reverse name '{}': {}", reverse, e))
        })?;

        Self::build(name, RecordTypeMapper::to_hickory(&RecordType::PTR))
    }

    fn build(
        name: Name,
        query_type: hickory_proto::rr::RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(query_type);
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
