use dioxus::prelude::*;

use crate::presentation::components::TopNav;
use crate::ports::outbound::storage_keys;
use crate::use_platform;

/// Player screen. Asks for a display name until one is stored.
#[component]
pub fn PlayerView() -> Element {
    let platform = use_platform();
    let mut stored_name = use_signal({
        let platform = platform.clone();
        move || platform.player_name()
    });
    let mut name_input = use_signal(String::new);

    let save_name = {
        let platform = platform.clone();
        move |_| {
            let name = name_input.read().trim().to_string();
            if name.is_empty() {
                return;
            }
            platform.storage_save(storage_keys::PLAYER_NAME, &name);
            stored_name.set(name);
        }
    };

    rsx! {
        TopNav { is_owner: false }
        main {
            class: "session-main",
            if stored_name.read().is_empty() {
                div {
                    class: "name-prompt",
                    label {
                        class: "field",
                        span { class: "field-label", "Your name" }
                        input {
                            class: "text-input",
                            r#type: "text",
                            value: "{name_input}",
                            oninput: move |e| name_input.set(e.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: save_name,
                        "Join"
                    }
                }
            } else {
                p {
                    class: "waiting",
                    "Waiting for the next turn, {stored_name}."
                }
            }
        }
    }
}
