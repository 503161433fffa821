//! Infrastructure layer
//!
//! Concrete adapters for the outbound ports: HTTP clients, the live feed
//! websocket and the platform (storage, logging, navigation).
//! Target-specific code is selected at compile time.

pub mod config;
pub mod http_client;
pub mod platform;
pub mod spawn_task;
pub mod websocket;

pub use config::ClientConfig;
pub use spawn_task::spawn_task;
