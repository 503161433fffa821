//! Application layer - Use cases and orchestration

pub mod api;
pub mod editing;
pub mod error;
pub mod services;

// Re-export common types
pub use error::ServiceError;
