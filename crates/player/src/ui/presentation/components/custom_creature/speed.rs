use combat_companion_domain::{Speed, SpeedKind};
use dioxus::prelude::*;

use crate::application::editing::SpeedDraft;

#[derive(Props, Clone, PartialEq)]
pub struct CustomSpeedProps {
    pub current_speed: Speed,
    /// Reset counter of the owning form; a change drops unsaved input
    #[props(default)]
    pub generation: u32,
    pub on_save: EventHandler<Speed>,
}

#[component]
pub fn CustomSpeed(props: CustomSpeedProps) -> Element {
    let mut draft = use_signal(|| SpeedDraft::new(props.current_speed.clone()));
    let mut seen_generation = use_signal(|| props.generation);

    use_effect(use_reactive(
        (&props.current_speed, &props.generation),
        move |(current, generation)| {
            if generation != *seen_generation.peek() {
                seen_generation.set(generation);
                draft.write().reset(current);
            } else {
                draft.write().sync_incoming(&current);
            }
        },
    ));

    let on_save = props.on_save;

    if draft.read().is_editing() {
        let edit_kind = draft.read().edit_kind();
        let value = draft.read().input_value().to_string();

        rsx! {
            div {
                class: "speed-editor",
                select {
                    class: "speed-kind",
                    value: "{edit_kind}",
                    onchange: move |e| {
                        if let Ok(kind) = e.value().parse::<SpeedKind>() {
                            draft.write().select_kind(kind);
                        }
                    },
                    for kind in SpeedKind::ALL {
                        option {
                            key: "{kind}",
                            value: "{kind}",
                            selected: kind == edit_kind,
                            "{kind.label()}"
                        }
                    }
                }
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "{edit_kind.label()}",
                    value: "{value}",
                    oninput: move |e| draft.write().input(&e.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let saved = draft.write().save();
                        on_save.call(saved);
                    },
                    "Save"
                }
            }
        }
    } else {
        let chips = draft.read().chips();

        rsx! {
            div {
                class: "speed-chips",
                for (kind, label) in chips {
                    span {
                        key: "{kind}",
                        class: "chip chip-info",
                        span { class: "chip-label", "{label}" }
                        button {
                            class: "chip-delete",
                            r#type: "button",
                            onclick: move |_| {
                                // committed at once, not staged behind Save
                                let next = draft.write().delete(kind);
                                on_save.call(next);
                            },
                            "×"
                        }
                    }
                }
                button {
                    class: "chip chip-info chip-clickable",
                    r#type: "button",
                    onclick: move |_| draft.write().begin_edit(),
                    "+"
                }
            }
        }
    }
}
