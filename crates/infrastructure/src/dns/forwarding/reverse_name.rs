use dns_dispatch_domain::DomainError;
use std::fmt::Write;
use std::net::IpAddr;

/// Parses the caller's IP string for a PTR lookup.
///
/// Surrounding whitespace and IPv6 brackets (`[::1]`) are tolerated.
pub fn parse_ip(raw: &str) -> Result<IpAddr, DomainError> {
    let trimmed = raw.trim();
    let unbracketed = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    unbracketed
        .parse::<IpAddr>()
        .map_err(|e| DomainError::InvalidIpAddress(format!("'{}': {}", raw, e)))
}

/// Reverse-mapping name for `ip` (RFC 1035 §3.5, RFC 3596 §2.5).
///
/// `192.0.2.1` → `1.2.0.192.in-addr.arpa.`
/// `2001:db8::1` → `1.0.0.0. … .8.b.d.0.1.0.0.2.ip6.arpa.`
pub fn reverse_name(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa.", d, c, b, a)
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(73);
            for byte in v6.octets().iter().rev() {
                // writing into a String cannot fail
                let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
            }
            name.push_str("ip6.arpa.");
            name
        }
    }
}
