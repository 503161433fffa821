//! Action, reaction and special-ability list editors

use combat_companion_domain::{Action, SpecialAbility};
use dioxus::prelude::*;

use crate::application::editing::{EntryListDraft, NamedEntry};

#[derive(Props, Clone, PartialEq)]
pub struct CustomActionsProps {
    pub current_actions: Vec<Action>,
    #[props(default)]
    pub generation: u32,
    pub on_update: EventHandler<Vec<Action>>,
}

/// Editor for actions, legendary actions and reactions.
#[component]
pub fn CustomActions(props: CustomActionsProps) -> Element {
    let draft = use_signal(|| EntryListDraft::new(props.current_actions.clone()));
    use_synced_items(draft, props.current_actions.clone(), props.generation);
    entry_list_editor(draft, props.on_update, "Action")
}

#[derive(Props, Clone, PartialEq)]
pub struct CustomAbilitiesProps {
    pub current_abilities: Vec<SpecialAbility>,
    #[props(default)]
    pub generation: u32,
    pub on_update: EventHandler<Vec<SpecialAbility>>,
}

#[component]
pub fn CustomAbilities(props: CustomAbilitiesProps) -> Element {
    let draft = use_signal(|| EntryListDraft::new(props.current_abilities.clone()));
    use_synced_items(draft, props.current_abilities.clone(), props.generation);
    entry_list_editor(draft, props.on_update, "Ability")
}

/// Adopt the owner's list whenever it changes; start over when the owning
/// form resets.
fn use_synced_items<T: NamedEntry + 'static>(
    mut draft: Signal<EntryListDraft<T>>,
    items: Vec<T>,
    generation: u32,
) {
    let mut seen_generation = use_signal(|| generation);
    use_effect(use_reactive((&items, &generation), move |(items, generation)| {
        if generation != *seen_generation.peek() {
            seen_generation.set(generation);
            draft.write().reset(items);
        } else {
            draft.write().sync(&items);
        }
    }));
}

fn entry_list_editor<T: NamedEntry + 'static>(
    mut draft: Signal<EntryListDraft<T>>,
    on_update: EventHandler<Vec<T>>,
    noun: &'static str,
) -> Element {
    let rows: Vec<(usize, String, String)> = draft
        .read()
        .items()
        .iter()
        .enumerate()
        .map(|(i, entry)| (i, entry.name().to_string(), entry.desc().to_string()))
        .collect();
    let is_adding = draft.read().is_adding();
    let pending_name = draft.read().pending().name().to_string();
    let pending_desc = draft.read().pending().desc().to_string();

    rsx! {
        div {
            class: "entry-list",
            for (i, name, desc) in rows {
                div {
                    key: "{i}",
                    class: "entry-row",
                    div {
                        class: "entry-text",
                        span { class: "entry-name", "{name}" }
                        if !desc.is_empty() {
                            span { class: "entry-desc", " {desc}" }
                        }
                    }
                    button {
                        class: "chip-delete",
                        r#type: "button",
                        onclick: move |_| {
                            let items = draft.write().remove(i);
                            on_update.call(items);
                        },
                        "×"
                    }
                }
            }

            if is_adding {
                div {
                    class: "entry-form",
                    input {
                        class: "text-input",
                        r#type: "text",
                        placeholder: "{noun} name",
                        value: "{pending_name}",
                        oninput: move |e| draft.write().set_pending_name(&e.value()),
                    }
                    textarea {
                        class: "text-input",
                        placeholder: "Description",
                        rows: 3,
                        value: "{pending_desc}",
                        oninput: move |e| draft.write().set_pending_desc(&e.value()),
                    }
                    div {
                        class: "entry-form-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| draft.write().cancel_add(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let added = draft.write().add();
                                if let Some(items) = added {
                                    on_update.call(items);
                                }
                            },
                            "Add {noun}"
                        }
                    }
                }
            } else {
                button {
                    class: "chip chip-info chip-clickable",
                    r#type: "button",
                    onclick: move |_| draft.write().begin_add(),
                    "+"
                }
            }
        }
    }
}
