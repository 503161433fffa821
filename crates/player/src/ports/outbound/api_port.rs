//! Typed HTTP port
//!
//! `ApiPort` is generic over request/response types, so it is not object-safe.
//! Services are generic over it; the composition root provides [`crate::application::api::Api`],
//! which implements it on top of the object-safe [`super::RawApiPort`].

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors raised by HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },
    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// Classify a non-success status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            Self::NotFound(message)
        } else {
            Self::HttpError { status, message }
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert_eq!(
            ApiError::from_status(404, "/sessions/x"),
            ApiError::NotFound("/sessions/x".into())
        );
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::HttpError {
                status: 500,
                message: "boom".into()
            }
        );
    }
}
