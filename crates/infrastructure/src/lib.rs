//! DNS Dispatch Infrastructure Layer
//!
//! Wire-level adapters behind the application ports: DNS message encoding
//! and decoding, the UDP and DNS-over-HTTPS transports, and the factories
//! that bind them into per-call resolvers.
pub mod dns;
