//! Canonical domain value used by forward lookups.
//!
//! Callers hand the dispatcher whatever the user typed: a bare hostname
//! (`example.com`), a URL (`https://example.com/path?q=1`) or something in
//! between. [`Domain::normalize`] extracts the host component and rejects
//! input that has none, so an empty name never reaches the wire.

use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;
use url::{Host, Url};

/// Scheme assumed when the input carries none.
const DEFAULT_SCHEME: &str = "http";

#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Domain {
    host: Box<str>,
}

impl Domain {
    /// Extracts the host of `raw`, treating scheme-less input as a host.
    ///
    /// The host is lowercased and a trailing root dot is dropped, so
    /// `Example.COM.` and `https://example.com/path` normalize to the same
    /// value. Fails with [`DomainError::InvalidDomainName`] when no host can
    /// be extracted.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "no host in empty input".to_string(),
            ));
        }

        let parsed = if trimmed.contains("://") {
            Url::parse(trimmed)
        } else {
            Url::parse(&format!("{DEFAULT_SCHEME}://{trimmed}"))
        }
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", trimmed, e)))?;

        let host = match parsed.host() {
            Some(Host::Domain(name)) => name.trim_end_matches('.').to_ascii_lowercase(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        };

        if host.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "no host in '{}'",
                trimmed
            )));
        }

        Ok(Self { host: host.into() })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}
