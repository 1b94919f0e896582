// Client-side access to the permit REST API
//
// This module provides:
// - The PermitGateway trait consumed by the wizard and pages
// - A reqwest-backed HttpPermitGateway
// - Session handling with capability resolution
// - Gateway error taxonomy

pub mod errors;
pub mod gateway;
pub mod http_gateway;
pub mod session;

// Re-export error types
pub use errors::{
    extract_error_message, GatewayError, GatewayResult, SessionError, SESSION_EXPIRED_MESSAGE,
};

// Re-export main client types
pub use gateway::PermitGateway;
pub use http_gateway::HttpPermitGateway;
pub use session::{Capability, CapabilitySet, Role, Session, SessionManager};
