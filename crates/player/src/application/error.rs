//! Service layer error types
//!
//! Errors raised by application services, abstracting over the HTTP adapter.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or server failure
    #[error("Request error: {0}")]
    Api(#[from] ApiError),
    /// Response was empty when data was expected
    #[error("Server returned empty response")]
    EmptyResponse,
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Api(ApiError::NotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_through_api_error() {
        let err = ServiceError::from(ApiError::from_status(404, "/sessions/abc"));
        assert!(err.is_not_found());
        assert!(!ServiceError::EmptyResponse.is_not_found());
    }
}
