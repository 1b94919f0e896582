use thiserror::Error;

/// Shown whenever the API rejects the bearer token
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Longest plain-text error body surfaced to the user as-is
const MAX_PLAIN_TEXT_MESSAGE: usize = 200;

/// Errors raised by the remote permit API boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    Network { message: String },

    /// The API answered with a non-success status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Unauthorized")]
    Unauthorized,

    /// A success response whose body could not be decoded
    #[error("Invalid response from {operation}: {message}")]
    InvalidResponse { operation: String, message: String },

    /// The client could not be constructed (bad configuration, missing session)
    #[error("Client setup failed: {message}")]
    Setup { message: String },
}

impl GatewayError {
    /// Message to show the user.
    ///
    /// Messages reported by the API are returned verbatim; anything else
    /// collapses to the operation-specific `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            GatewayError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the API itself supplied the message
    pub fn is_reported_by_api(&self) -> bool {
        matches!(self, GatewayError::Api { message: Some(_), .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::InvalidResponse {
            operation: "decode".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

fn non_empty_str(value: Option<&serde_json::Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Pulls a human-readable message out of an error response body.
///
/// Looks at `message`, `error`, `detail`, then the first entry of an `errors`
/// array (plain strings or `{ "message": ... }` objects). Short plain-text
/// bodies are used as-is; HTML error pages are ignored.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => {
            for field in ["message", "error", "detail"] {
                if let Some(message) = non_empty_str(value.get(field)) {
                    return Some(message);
                }
            }

            value
                .get("errors")
                .and_then(|errors| errors.as_array())
                .and_then(|errors| errors.first())
                .and_then(|first| {
                    non_empty_str(Some(first)).or_else(|| non_empty_str(first.get("message")))
                })
        }
        Err(_) => {
            if trimmed.starts_with('<') || trimmed.len() > MAX_PLAIN_TEXT_MESSAGE {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Errors from reading or writing the browser-stored session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Session storage error: {message}")]
    Storage { message: String },
}
