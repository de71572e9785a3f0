#![allow(dead_code)]

mod doh_server_mock;

pub use dns_server_mock::{
    MockDnsServer, MockZone, SeenQuestion, RCODE_NOERROR, RCODE_NXDOMAIN, RCODE_SERVFAIL,
};
pub use doh_server_mock::{HttpBehavior, MockDohServer};
