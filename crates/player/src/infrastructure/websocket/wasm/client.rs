//! WASM WebSocket client using gloo-net

use std::time::Duration;

use anyhow::Result;
use combat_companion_shared::FeedMessage;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};

use crate::infrastructure::websocket::core::{forward_frame, MAX_RETRY_ATTEMPTS};
use crate::infrastructure::websocket::BackoffState;

enum ReadEnd {
    ServerClosed,
    ReceiverGone,
}

/// Read-only client for a session's event feed (WASM)
pub struct FeedClient {
    url: String,
    tx: UnboundedSender<FeedMessage>,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, tx: UnboundedSender<FeedMessage>) -> Self {
        Self {
            url: url.into(),
            tx,
        }
    }

    /// Get the URL this client is configured for
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connect and keep reading until reconnection attempts run out or the
    /// receiver is dropped.
    ///
    /// Dropping the returned future closes the socket.
    pub async fn run(self) {
        let mut backoff = BackoffState::default();

        loop {
            match self.connect_and_read(&mut backoff).await {
                Ok(ReadEnd::ServerClosed) => tracing::info!(url = %self.url, "Feed closed by server"),
                Ok(ReadEnd::ReceiverGone) => return,
                Err(e) => tracing::warn!(url = %self.url, error = %e, "Feed connection failed"),
            }

            let Some(delay) = backoff.next_delay_and_advance() else {
                tracing::error!("Max feed reconnection attempts reached, giving up");
                return;
            };
            tracing::info!(
                "Feed reconnection attempt {} of {}, waiting {}ms",
                backoff.attempts(),
                MAX_RETRY_ATTEMPTS,
                delay
            );
            gloo_timers::future::sleep(Duration::from_millis(delay)).await;
        }
    }

    async fn connect_and_read(&self, backoff: &mut BackoffState) -> Result<ReadEnd> {
        let ws = WebSocket::open(&self.url)
            .map_err(|e| anyhow::anyhow!("Failed to create WebSocket: {}", e))?;
        tracing::info!("Connected to session feed at {}", self.url);

        let (_write, mut read) = ws.split();
        let mut opened = false;
        while let Some(msg) = read.next().await {
            // the socket only yields once the handshake completed
            if !opened {
                backoff.reset();
                opened = true;
            }
            match msg.map_err(|e| anyhow::anyhow!("{}", e))? {
                Message::Text(text) => {
                    if !forward_frame(&text, &self.tx) {
                        return Ok(ReadEnd::ReceiverGone);
                    }
                }
                Message::Bytes(_) => {}
            }
        }
        Ok(ReadEnd::ServerClosed)
    }
}
