pub mod https;
pub mod udp;

use async_trait::async_trait;
use dns_dispatch_domain::DomainError;
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// Enum-dispatched transport, one variant per resolver kind.
pub enum Transport {
    Udp(udp::UdpTransport),
    Https(https::HttpsTransport),
}

impl Transport {
    /// Send a DNS query via the appropriate protocol (static dispatch).
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    /// Protocol name for logging.
    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(t) => t.protocol_name(),
            Self::Https(t) => t.protocol_name(),
        }
    }

    /// Server the transport talks to, as shown in logs and errors.
    pub fn server(&self) -> String {
        match self {
            Self::Udp(t) => t.server_addr().to_string(),
            Self::Https(t) => t.url().to_string(),
        }
    }
}
