//! Service Errors
//!
//! Failures reported by the remote record store.

use super::PersonId;

/// Common result type for record store operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request could not be sent or the response could not be read
    Transport(String),
    /// The addressed record no longer exists on the server
    NotFound(PersonId),
    /// Any other non-2xx response
    Status(u16),
    /// The response body was not a valid record representation
    Decode(String),
}

impl ServiceError {
    /// True when the target record is gone server-side
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ServiceError::NotFound(id) => write!(f, "Not found: person {}", id),
            ServiceError::Status(code) => write!(f, "Unexpected status: {}", code),
            ServiceError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}
