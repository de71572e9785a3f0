#![allow(dead_code)]

pub mod stub_resolvers;

pub use stub_resolvers::{
    a_record, aaaa_record, ptr_record, Created, Invocation, Outcome, StubFactory,
};
