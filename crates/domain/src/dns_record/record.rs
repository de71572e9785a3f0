use super::RecordType;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Payload of an answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A / AAAA
    Address(IpAddr),
    /// PTR target
    Name(Arc<str>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(addr) => write!(f, "{}", addr),
            RecordData::Name(name) => write!(f, "{}", name),
        }
    }
}

/// DNS answer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Owner name as it appeared in the answer section
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub data: RecordData,
    /// Time to live in seconds
    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        data: RecordData,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            data,
            ttl,
        }
    }

    /// Address record; the type follows the address family.
    pub fn address(name: impl Into<Arc<str>>, address: IpAddr, ttl: u32) -> Self {
        let record_type = if address.is_ipv4() {
            RecordType::A
        } else {
            RecordType::AAAA
        };
        Self::new(name, record_type, RecordData::Address(address), ttl)
    }

    pub fn pointer(name: impl Into<Arc<str>>, target: impl Into<Arc<str>>, ttl: u32) -> Self {
        Self::new(name, RecordType::PTR, RecordData::Name(target.into()), ttl)
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::Address(addr) => Some(addr),
            RecordData::Name(_) => None,
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.record_type, self.name, self.data, self.ttl
        )
    }
}
