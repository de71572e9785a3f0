//! DNS Dispatch Application Layer
//!
//! Ports describe what the dispatcher needs from the outside world (resolver
//! capabilities and the factories that build them); services hold the
//! orchestration that runs on top of those ports.
pub mod ports;
pub mod services;
