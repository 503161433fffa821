//! SessionLayout - shared wrapper for all session-scoped routes
//!
//! On mount this component:
//! - sets the page title
//! - provides `SessionContext`, `FeedState` and `ConditionsContext`
//! - starts the feed client for the session
//! - loads the condition catalog
//!
//! Tasks are spawned on this component's scope, so leaving the session stops
//! the feed and drops any catalog request still in flight.

use combat_companion_domain::SessionId;
use combat_companion_shared::FeedMessage;
use dioxus::prelude::*;
use futures_channel::mpsc::unbounded;
use futures_util::StreamExt;

use crate::infrastructure::websocket::FeedClient;
use crate::infrastructure::{spawn_task, ClientConfig};
use crate::presentation::services::use_condition_service;
use crate::presentation::state::{ConditionsContext, FeedState, SessionContext};
use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct SessionLayoutProps {
    pub session_id: String,
    /// Page title shown in browser tab
    pub page_title: &'static str,
    pub children: Element,
}

#[component]
pub fn SessionLayout(props: SessionLayoutProps) -> Element {
    let platform = use_platform();
    let config = use_context::<ClientConfig>();
    let condition_service = use_condition_service();

    let session_id = SessionId::new(props.session_id.clone());
    use_context_provider({
        let session_id = session_id.clone();
        move || SessionContext::new(session_id)
    });
    let mut feed = use_context_provider(FeedState::new);
    let conditions = use_context_provider(ConditionsContext::new);

    let title = props.page_title;
    use_effect(move || {
        platform.set_page_title(title);
    });

    // Live feed: socket -> channel -> FeedState signal
    use_hook(move || {
        let url = config.feed_url_for(&session_id);
        let (tx, mut rx) = unbounded::<FeedMessage>();

        spawn_task(FeedClient::new(url, tx).run());

        spawn_task(async move {
            while let Some(message) = rx.next().await {
                feed.publish(message);
            }
        });
    });

    // Condition catalog
    use_hook(move || {
        let mut catalog = conditions.catalog();
        spawn_task(async move {
            match condition_service.list_conditions().await {
                Ok(loaded) => catalog.set(loaded),
                Err(e) => tracing::warn!(error = %e, "Failed to load condition catalog"),
            }
        });
    });

    rsx! {
        div {
            class: "session-layout",
            {props.children}
        }
    }
}
