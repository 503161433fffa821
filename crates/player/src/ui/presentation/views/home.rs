use dioxus::prelude::*;

use crate::ports::outbound::storage_keys;
use crate::routes::Route;
use crate::use_platform;

/// Landing screen: open a session as its owner or join it as a player.
#[component]
pub fn HomeView() -> Element {
    let platform = use_platform();
    let navigator = use_navigator();

    let mut session_id = use_signal(|| {
        platform
            .storage_load(storage_keys::LAST_SESSION)
            .unwrap_or_default()
    });

    let open = {
        let platform = platform.clone();
        move |as_owner: bool| {
            let id = session_id.read().trim().to_string();
            if id.is_empty() {
                return;
            }
            platform.storage_save(storage_keys::LAST_SESSION, &id);
            if as_owner {
                navigator.push(Route::DmRoute { session_id: id });
            } else {
                navigator.push(Route::PlayerRoute { session_id: id });
            }
        }
    };
    let open_owner = open.clone();
    let open_player = open;

    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "Combat Companion" }
            label {
                class: "field",
                span { class: "field-label", "Session code" }
                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{session_id}",
                    oninput: move |e| session_id.set(e.value()),
                }
            }
            div {
                class: "home-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_owner(true),
                    "Run session"
                }
                button {
                    class: "btn",
                    onclick: move |_| open_player(false),
                    "Join as player"
                }
            }
        }
    }
}
