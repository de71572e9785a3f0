use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_dispatch_domain::DomainError;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// Shared client with connection pooling; per-request deadlines come from
/// the resolver timeout.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Content type for DNS-over-HTTPS messages (RFC 8484 §6)
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport (RFC 8484)
pub struct HttpsTransport {
    url: Arc<str>,
}

impl HttpsTransport {
    pub fn new(url: Arc<str>) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.url.to_string(),
        }
    }

    fn failure(&self, reason: String) -> DomainError {
        DomainError::TransportFailure {
            server: self.url.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        // Request and body read share one deadline.
        let deadline = Instant::now() + timeout;

        // POST with application/dns-message (RFC 8484 §4.1)
        let response = timeout_at(
            deadline,
            SHARED_CLIENT
                .post(&*self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .body(message_bytes.to_vec())
                .send(),
        )
        .await
        .map_err(|_| self.timeout_error())?
        .map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                self.failure(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let response_bytes = timeout_at(deadline, response.bytes())
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.failure(format!("failed to read body: {}", e)))?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}
