//! Custom monster form
//!
//! Scalar fields update the draft on every keystroke; the whole monster only
//! reaches the parent through the Add button.

use combat_companion_domain::Monster;
use dioxus::prelude::*;

use super::{CustomAbilities, CustomActions, CustomSpeed};
use crate::application::editing::MonsterDraft;

#[derive(Props, Clone, PartialEq)]
pub struct CustomMonsterFormProps {
    /// Initial value; a different value replaces whatever is being edited
    pub current_monster: Monster,
    pub on_add: EventHandler<Monster>,
}

#[component]
pub fn CustomMonsterForm(props: CustomMonsterFormProps) -> Element {
    let mut draft = use_signal(|| MonsterDraft::new(props.current_monster.clone()));

    use_effect(use_reactive((&props.current_monster,), move |(initial,)| {
        if draft.write().resync(&initial) {
            tracing::debug!(monster = %initial.name, "Custom monster form reset from new initial value");
        }
    }));

    let on_add = props.on_add;
    let generation = draft.read().generation();
    let monster = draft.read().working().clone();
    let hp_roll_text = draft.read().hp_roll_text().to_string();
    let hp_help = match draft.read().expected_hit_points() {
        Some(avg) => format!("Example: 4d6+2 (average {})", avg),
        None => "Example: 4d6+2".to_string(),
    };
    let armor_class = monster.primary_armor_class();

    rsx! {
        div {
            class: "monster-form",

            div {
                class: "form-row",
                TextField {
                    label: "Name",
                    value: monster.name.clone(),
                    on_input: move |v: String| draft.write().set_name(&v),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Speed" }
                CustomSpeed {
                    current_speed: monster.speed.clone(),
                    generation,
                    on_save: move |speed| draft.write().set_speed(speed),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Skills" }
                div {
                    class: "ability-grid",
                    NumberField {
                        label: "Strength",
                        value: monster.strength,
                        on_input: move |v: String| draft.write().set_strength(&v),
                    }
                    NumberField {
                        label: "Dexterity",
                        value: monster.dexterity,
                        on_input: move |v: String| draft.write().set_dexterity(&v),
                    }
                    NumberField {
                        label: "Constitution",
                        value: monster.constitution,
                        on_input: move |v: String| draft.write().set_constitution(&v),
                    }
                    NumberField {
                        label: "Intelligence",
                        value: monster.intelligence,
                        on_input: move |v: String| draft.write().set_intelligence(&v),
                    }
                    NumberField {
                        label: "Wisdom",
                        value: monster.wisdom,
                        on_input: move |v: String| draft.write().set_wisdom(&v),
                    }
                    NumberField {
                        label: "Charisma",
                        value: monster.charisma,
                        on_input: move |v: String| draft.write().set_charisma(&v),
                    }
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "HP" }
                TextField {
                    label: "HP Roll",
                    value: hp_roll_text,
                    on_input: move |v: String| {
                        draft.write().set_hp_roll(&v);
                    },
                }
                p {
                    class: "helper-text",
                    "{hp_help}"
                }
                NumberField {
                    label: "HP",
                    value: monster.hit_points,
                    on_input: move |v: String| draft.write().set_hit_points(&v),
                }
            }

            div {
                class: "form-row",
                NumberField {
                    label: "AC",
                    value: armor_class,
                    on_input: move |v: String| draft.write().set_armor_class(&v),
                }
            }

            div {
                class: "form-row",
                NumberField {
                    label: "Proficiency Bonus",
                    value: monster.proficiency_bonus,
                    on_input: move |v: String| draft.write().set_proficiency(&v),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Actions" }
                CustomActions {
                    current_actions: monster.actions.clone(),
                    generation,
                    on_update: move |actions| draft.write().set_actions(actions),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Legendary Actions" }
                CustomActions {
                    current_actions: monster.legendary_actions.clone(),
                    generation,
                    on_update: move |actions| draft.write().set_legendary_actions(actions),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Special Abilities" }
                CustomAbilities {
                    current_abilities: monster.special_abilities.clone(),
                    generation,
                    on_update: move |abilities| draft.write().set_special_abilities(abilities),
                }
            }

            div {
                class: "form-row",
                div { class: "bold-label", "Reactions" }
                CustomActions {
                    current_actions: monster.reactions.clone(),
                    generation,
                    on_update: move |reactions| draft.write().set_reactions(reactions),
                }
            }

            div {
                class: "form-row",
                button {
                    class: "btn btn-primary btn-full",
                    aria_label: "add",
                    onclick: move |_| {
                        let submitted = draft.write().submit();
                        on_add.call(submitted);
                    },
                    "Add"
                }
            }
        }
    }
}

#[component]
fn TextField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "text-input",
                r#type: "text",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Integer input. Whatever is typed is handed over as text and coerced by
/// the draft, so the field shows 0 for empty or non-numeric input.
#[component]
fn NumberField(label: &'static str, value: i32, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field field-number",
            span { class: "field-label", "{label}" }
            input {
                class: "text-input",
                r#type: "text",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
