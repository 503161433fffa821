//! Combat Companion wire types
//!
//! This crate contains the types exchanged with the session server:
//! - Real-time feed messages (`FeedMessage`, `EventType`)
//! - REST response shapes that differ from the domain records
//! - REST/WebSocket path builders
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json and thiserror only
//! 2. **No business logic** - pure data types and serialization
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod messages;
pub mod paths;
pub mod responses;

pub use messages::{EventType, FeedError, FeedMessage};
pub use responses::{ConditionListResponse, CustomMonsterOption};
