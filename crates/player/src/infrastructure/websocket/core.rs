//! Platform-agnostic core of the feed client.
//!
//! Free of any runtime / platform dependencies (tokio, web-sys, etc). The
//! desktop and wasm clients own the socket and call into this for frame
//! decoding, forwarding and reconnection backoff math.

use combat_companion_shared::FeedMessage;
use futures_channel::mpsc::UnboundedSender;

// Reconnection constants (kept here so desktop + wasm stay in sync)
pub const INITIAL_RETRY_DELAY_MS: u64 = 1_000;
pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
pub const MAX_RETRY_ATTEMPTS: u32 = 10;
pub const BACKOFF_MULTIPLIER: f64 = 2.0;

/// Exponential backoff state shared by reconnect logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffState {
    attempts: u32,
    delay_ms: u64,
}

impl Default for BackoffState {
    fn default() -> Self {
        Self {
            attempts: 0,
            delay_ms: INITIAL_RETRY_DELAY_MS,
        }
    }
}

impl BackoffState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts >= MAX_RETRY_ATTEMPTS
    }

    /// Advance to the next attempt, updating the delay for the subsequent attempt.
    ///
    /// Returns the delay to wait *before* performing this attempt.
    pub fn next_delay_and_advance(&mut self) -> Option<u64> {
        if self.is_exhausted() {
            return None;
        }

        let current_delay = self.delay_ms;
        self.attempts += 1;
        self.delay_ms =
            ((self.delay_ms as f64) * BACKOFF_MULTIPLIER).min(MAX_RETRY_DELAY_MS as f64) as u64;
        Some(current_delay)
    }
}

/// Decode a text frame, logging and dropping anything malformed.
pub fn decode_frame(text: &str) -> Option<FeedMessage> {
    match FeedMessage::parse(text) {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::warn!(error = %e, "Dropping malformed feed frame");
            None
        }
    }
}

/// Decode a text frame and hand it to the UI side of the feed.
///
/// Returns `false` once the receiver has been dropped; the client should
/// stop reading then.
pub fn forward_frame(text: &str, tx: &UnboundedSender<FeedMessage>) -> bool {
    let Some(message) = decode_frame(text) else {
        return true;
    };
    if tx.unbounded_send(message).is_err() {
        tracing::debug!("Feed receiver dropped, stopping feed client");
        return false;
    }
    true
}
