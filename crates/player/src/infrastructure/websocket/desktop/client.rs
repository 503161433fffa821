//! Desktop WebSocket client using tokio-tungstenite

use std::time::Duration;

use anyhow::Result;
use combat_companion_shared::FeedMessage;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::infrastructure::websocket::core::{forward_frame, MAX_RETRY_ATTEMPTS};
use crate::infrastructure::websocket::BackoffState;

enum ReadEnd {
    ServerClosed,
    ReceiverGone,
}

/// Read-only client for a session's event feed (Desktop)
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
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    async fn connect_and_read(&self, backoff: &mut BackoffState) -> Result<ReadEnd> {
        let (ws_stream, _) = connect_async(&self.url).await?;
        tracing::info!("Connected to session feed at {}", self.url);
        backoff.reset();

        let (_write, mut read) = ws_stream.split();
        while let Some(msg) = read.next().await {
            match msg? {
                Message::Text(text) => {
                    if !forward_frame(&text, &self.tx) {
                        return Ok(ReadEnd::ReceiverGone);
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        Ok(ReadEnd::ServerClosed)
    }
}
