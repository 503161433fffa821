//! Session top bar
//!
//! Branding, the player's name and the session menu. Owners additionally get
//! the QR code link and End Session; developer builds add a direct join link.

use combat_companion_domain::Session;
use dioxus::prelude::*;

use crate::application::editing::{FeedReaction, MenuItem, TopNavModel};
use crate::infrastructure::{spawn_task, ClientConfig};
use crate::presentation::services::use_session_service;
use crate::presentation::state::{FeedState, SessionContext};
use crate::routes::Route;
use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct TopNavProps {
    /// Whether the viewer owns (runs) the session
    pub is_owner: bool,
}

#[component]
pub fn TopNav(props: TopNavProps) -> Element {
    let platform = use_platform();
    let config = use_context::<ClientConfig>();
    let session_ctx = use_context::<SessionContext>();
    let feed = use_context::<FeedState>();
    let session_service = use_session_service();
    let navigator = use_navigator();

    let model = TopNavModel::new(
        config.client_base_url.clone(),
        session_ctx.session_id.clone(),
        props.is_owner,
        config.developer_ui,
    );

    let mut session: Signal<Option<Session>> = use_signal(|| None);
    let mut menu_open = use_signal(|| false);

    // Load session metadata once on mount
    {
        let svc = session_service.clone();
        let session_id = session_ctx.session_id.clone();
        use_effect(move || {
            let svc = svc.clone();
            let session_id = session_id.clone();
            spawn_task(async move {
                match svc.get_single_session(&session_id).await {
                    Ok(found) => session.set(found),
                    Err(e) => {
                        tracing::warn!(error = %e, session = %session_id, "Failed to load session")
                    }
                }
            });
        });
    }

    // React to the live feed
    {
        let model = model.clone();
        use_effect(move || {
            let last = feed.last_message.read().clone();
            if let Some(message) = last {
                if model.handle_feed(&message) == FeedReaction::Unhandled {
                    tracing::debug!(event = ?message.event_type, "Feed event not handled by top bar");
                }
            }
        });
    }

    let end_session = {
        let svc = session_service.clone();
        let platform = platform.clone();
        let session_id = session_ctx.session_id.clone();
        let redirect = model.end_session_redirect().to_string();
        move |_: MouseEvent| {
            menu_open.set(false);
            let svc = svc.clone();
            let platform = platform.clone();
            let session_id = session_id.clone();
            let redirect = redirect.clone();
            spawn_task(async move {
                match svc.end_session(&session_id).await {
                    Ok(()) => {
                        if !platform.navigate_to(&redirect) {
                            navigator.push(Route::Home {});
                        }
                    }
                    // Failure leaves the screen as it is
                    Err(e) => tracing::warn!(error = %e, session = %session_id, "Failed to end session"),
                }
            });
        }
    };

    let player_name = platform.player_name();
    let menu = model
        .menu_items(session.read().as_ref())
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            MenuItem::SessionName(name) => rsx! {
                li { key: "{i}", class: "menu-item menu-session-name", "{name}" }
            },
            MenuItem::Divider => rsx! {
                li { key: "{i}", class: "menu-divider" }
            },
            MenuItem::ShowQrCode(url) => rsx! {
                li {
                    key: "{i}",
                    class: "menu-item",
                    a { href: "{url}", target: "_blank", "Show QR code" }
                }
            },
            MenuItem::EndSession => rsx! {
                li {
                    key: "{i}",
                    class: "menu-item menu-action",
                    onclick: end_session.clone(),
                    "End Session"
                }
            },
            MenuItem::PlayerJoin(url) => rsx! {
                li {
                    key: "{i}",
                    class: "menu-item",
                    a { href: "{url}", target: "_blank", "Player Join" }
                }
            },
        })
        .collect::<Vec<_>>();

    rsx! {
        header {
            class: "top-nav",
            span {
                class: "top-nav-brand",
                "Combat Companion"
            }
            div {
                class: "top-nav-spacer",
            }
            div {
                class: "top-nav-user",
                span {
                    class: "top-nav-player-name",
                    "{player_name}"
                }
                button {
                    class: "top-nav-account",
                    title: "Open settings",
                    onclick: move |_| {
                        let open = *menu_open.read();
                        menu_open.set(!open);
                    },
                    "☰"
                }

                if *menu_open.read() {
                    ul {
                        class: "top-nav-menu",
                        {menu.into_iter()}
                    }
                }
            }
        }
    }
}
