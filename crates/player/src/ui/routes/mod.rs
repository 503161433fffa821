//! Routing
//!
//! Session screens are wrapped in `SessionLayout`, which provides the session
//! context, the live feed and the condition catalog to everything below it.

use dioxus::prelude::*;

use crate::presentation::views::{DmView, HomeView, PlayerView};

mod session_layout;

pub use session_layout::SessionLayout;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:session_id/dm")]
    DmRoute { session_id: String },
    #[route("/:session_id")]
    PlayerRoute { session_id: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}

#[component]
fn DmRoute(session_id: String) -> Element {
    rsx! {
        SessionLayout {
            session_id,
            page_title: "Combat Companion - Session",
            DmView {}
        }
    }
}

#[component]
fn PlayerRoute(session_id: String) -> Element {
    rsx! {
        SessionLayout {
            session_id,
            page_title: "Combat Companion",
            PlayerView {}
        }
    }
}
