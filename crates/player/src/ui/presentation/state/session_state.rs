//! Session-scoped context values
//!
//! Provided by `SessionLayout` for every screen under `/:session_id`.

use combat_companion_domain::SessionId;
use combat_companion_shared::FeedMessage;
use dioxus::prelude::*;

/// Which session the subtree belongs to. Read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: SessionId,
}

impl SessionContext {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// Latest message read from the session feed
#[derive(Clone, Copy)]
pub struct FeedState {
    pub last_message: Signal<Option<FeedMessage>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            last_message: Signal::new(None),
        }
    }

    pub fn publish(&mut self, message: FeedMessage) {
        self.last_message.set(Some(message));
    }
}
