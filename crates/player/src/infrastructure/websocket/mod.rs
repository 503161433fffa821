//! Session feed WebSocket client
//!
//! Platform clients read text frames, decode them into `FeedMessage`s and
//! send them down an unbounded channel to the UI. Both reconnect with the
//! same backoff.

pub mod core;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use self::core::BackoffState;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::FeedClient;
#[cfg(target_arch = "wasm32")]
pub use wasm::FeedClient;
