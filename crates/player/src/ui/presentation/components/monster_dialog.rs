use combat_companion_domain::Monster;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MonsterInfoDialogProps {
    pub open: bool,
    pub monster: Monster,
    pub on_close: EventHandler<()>,
}

/// Raw stat block of a monster, as indented JSON.
#[component]
pub fn MonsterInfoDialog(props: MonsterInfoDialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let json = match serde_json::to_string_pretty(&props.monster) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, monster = %props.monster.name, "Failed to render stat block");
            String::new()
        }
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "dialog",
                onclick: |e| e.stop_propagation(),
                pre {
                    class: "dialog-json",
                    "{json}"
                }
            }
        }
    }
}
