use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport to {server} failed: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for failures raised by the network path rather than by the input.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportFailure { .. }
                | DomainError::IoError(_)
        )
    }
}
