//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **formatting**: currency, area, file size and timestamp display helpers
//! - **validation**: CSS classes for validated form fields

pub mod console_macros;
pub mod formatting;
pub mod validation;

pub use formatting::*;
pub use validation::*;
