//! Infrastructure Services
//!
//! - **client**: permit API gateway, HTTP implementation, session and capabilities
//! - **config**: portal configuration and build-time overrides
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
