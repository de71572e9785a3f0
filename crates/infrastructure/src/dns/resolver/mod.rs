//! Concrete resolvers behind the application ports.
//!
//! - [`TransportResolver`]: one server, one record type, one timeout
//! - [`UdpResolverFactory`] / [`DohResolverFactory`]: build a fresh
//!   `TransportResolver` per call

pub mod factory;
pub mod transport_resolver;

pub use factory::{DohResolverFactory, UdpResolverFactory};
pub use transport_resolver::TransportResolver;
