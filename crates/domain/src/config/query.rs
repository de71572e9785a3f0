use crate::timeout::Timeout;
use serde::{Deserialize, Serialize};

/// How the IPv4 and IPv6 halves of a dual-family lookup are issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyStrategy {
    /// A query completes before the AAAA query starts
    #[default]
    Sequential,
    /// Both queries in flight at once, joined before merging
    Parallel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Timeout in seconds applied when the caller does not pass one
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub family_strategy: FamilyStrategy,
}

impl QueryConfig {
    pub fn default_timeout(&self) -> Timeout {
        Timeout::from_secs(self.timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            family_strategy: FamilyStrategy::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    Timeout::DEFAULT_SECS
}
