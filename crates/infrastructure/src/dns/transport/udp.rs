use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_dispatch_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport.
///
/// A fresh socket is bound for every query and dropped with the response.
/// Only a datagram from the server's exact address is accepted; anything else
/// is dropped while waiting.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Ephemeral local address of the same family as the server.
    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), 0)
        } else {
            SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), 0)
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn failure(&self, reason: String) -> DomainError {
        DomainError::TransportFailure {
            server: self.server_addr.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        // One deadline for the whole exchange, however many datagrams arrive.
        let deadline = Instant::now() + timeout;

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.failure(format!("send failed: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = loop {
            let (len, from_addr) = timeout_at(deadline, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.failure(format!("receive failed: {}", e)))?;

            if from_addr == self.server_addr {
                break len;
            }

            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "Discarding UDP datagram from unexpected source"
            );
        };

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
