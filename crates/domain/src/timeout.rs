use std::fmt;
use std::time::Duration;

/// Per-query timeout in whole seconds.
///
/// Chosen once at the call boundary (caller value, else the configured
/// default) and then handed unchanged to every resolver built for that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timeout(u64);

impl Timeout {
    pub const DEFAULT_SECS: u64 = 5;

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }

    /// Caller value if present, otherwise `default`.
    pub fn or_default(requested: Option<Timeout>, default: Timeout) -> Timeout {
        requested.unwrap_or(default)
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self(Self::DEFAULT_SECS)
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
