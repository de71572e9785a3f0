//! DNS Dispatch Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod timeout;

pub use config::{CliOverrides, Config, ConfigError, FamilyStrategy};
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use domain_name::Domain;
pub use errors::DomainError;
pub use timeout::Timeout;
