pub mod resolver;
pub mod resolver_factory;

pub use resolver::{ResolvedRecords, Resolver};
pub use resolver_factory::{
    DohResolverParams, LocalResolverFactory, RemoteResolverFactory, ResolverParams,
    UdpResolverParams,
};
