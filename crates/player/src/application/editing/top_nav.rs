//! Session top bar model
//!
//! Decides which menu entries the bar shows and how it reacts to feed events.
//! Links are built from the configured client base URL.

use combat_companion_domain::{Session, SessionId};
use combat_companion_shared::{EventType, FeedMessage};

/// Entries of the session menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Session name row; empty until the session has loaded
    SessionName(String),
    Divider,
    /// Link to the join QR code page (owner only)
    ShowQrCode(String),
    /// End the session (owner only)
    EndSession,
    /// Direct player-join link (owner only, developer builds)
    PlayerJoin(String),
}

/// What the bar did with a feed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedReaction {
    /// Recognized; nothing to show yet
    Ignored,
    /// Not handled by the bar
    Unhandled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopNavModel {
    base_url: String,
    session_id: SessionId,
    is_owner: bool,
    developer_ui: bool,
}

impl TopNavModel {
    pub fn new(
        base_url: impl Into<String>,
        session_id: SessionId,
        is_owner: bool,
        developer_ui: bool,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session_id,
            is_owner,
            developer_ui,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    /// Shareable URL players use to join this session.
    pub fn player_join_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.session_id)
    }

    pub fn qr_url(&self) -> String {
        format!("{}/qr", self.player_join_url())
    }

    /// Where to go once the session has ended.
    pub fn end_session_redirect(&self) -> &str {
        &self.base_url
    }

    pub fn menu_items(&self, session: Option<&Session>) -> Vec<MenuItem> {
        let name = session
            .map(|s| s.session_name.clone())
            .unwrap_or_default();
        let mut items = vec![MenuItem::SessionName(name), MenuItem::Divider];

        if self.is_owner {
            items.push(MenuItem::ShowQrCode(self.qr_url()));
            items.push(MenuItem::EndSession);
            if self.developer_ui {
                items.push(MenuItem::PlayerJoin(self.player_join_url()));
            }
        }
        items
    }

    pub fn handle_feed(&self, message: &FeedMessage) -> FeedReaction {
        match message.event_type {
            // order updates are consumed by the combat tracker, not the bar
            EventType::ReceiveOrderUpdate => FeedReaction::Ignored,
            _ => FeedReaction::Unhandled,
        }
    }
}
