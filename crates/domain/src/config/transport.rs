use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Loopback forwarding resolver reached over plain UDP
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalTransportConfig {
    /// Address of the local resolver (default: 127.0.0.1)
    #[serde(default = "default_local_address")]
    pub address: IpAddr,

    /// Port used when the caller does not pass one (default: 5354)
    #[serde(default = "default_local_port")]
    pub port: u16,
}

impl Default for LocalTransportConfig {
    fn default() -> Self {
        Self {
            address: default_local_address(),
            port: default_local_port(),
        }
    }
}

/// DNS-over-HTTPS endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteTransportConfig {
    /// Full DoH URL (RFC 8484), e.g. "https://dns.quad9.net/dns-query"
    #[serde(default = "default_remote_endpoint")]
    pub endpoint: String,
}

impl Default for RemoteTransportConfig {
    fn default() -> Self {
        Self {
            endpoint: default_remote_endpoint(),
        }
    }
}

fn default_local_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_local_port() -> u16 {
    5354
}

fn default_remote_endpoint() -> String {
    "https://dns.quad9.net/dns-query".to_string()
}
