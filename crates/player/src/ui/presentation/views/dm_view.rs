//! Owner screen: creatures in the encounter, their conditions and the
//! custom creature editor.

use combat_companion_domain::Monster;
use dioxus::prelude::*;

use crate::application::editing::{CombatRoster, RosterId};
use crate::presentation::components::{AddCustomCreature, ConditionItem, MonsterInfoDialog, TopNav};
use crate::presentation::state::ConditionsContext;

#[component]
pub fn DmView() -> Element {
    let mut roster = use_signal(CombatRoster::new);
    let mut inspecting: Signal<Option<Monster>> = use_signal(|| None);

    let entries = roster.read().entries().to_vec();
    let dialog_monster = inspecting.read().clone();

    rsx! {
        TopNav { is_owner: true }
        main {
            class: "session-main dm-layout",
            section {
                class: "creature-list",
                h2 { class: "section-title", "Creatures" }
                if entries.is_empty() {
                    p { class: "empty-hint", "No creatures yet." }
                }
                for entry in entries {
                    CreatureRow {
                        key: "{entry.id}",
                        id: entry.id,
                        monster: entry.monster.clone(),
                        conditions: entry.conditions.clone(),
                        on_inspect: move |monster: Monster| inspecting.set(Some(monster)),
                        on_add_condition: move |(id, condition): (RosterId, String)| {
                            roster.write().add_condition(id, &condition);
                        },
                        on_remove_condition: move |(id, condition): (RosterId, String)| {
                            roster.write().remove_condition(id, &condition);
                        },
                        on_remove: move |id: RosterId| {
                            roster.write().remove(id);
                        },
                    }
                }
            }
            section {
                class: "custom-creature-panel",
                h2 { class: "section-title", "Add custom creature" }
                AddCustomCreature {
                    on_add: move |monster: Monster| {
                        let id = roster.write().add(monster);
                        tracing::debug!(id, "Added custom creature");
                    },
                }
            }
        }
        if let Some(monster) = dialog_monster {
            MonsterInfoDialog {
                open: true,
                monster,
                on_close: move |_| inspecting.set(None),
            }
        }
    }
}

#[component]
fn CreatureRow(
    id: RosterId,
    monster: Monster,
    conditions: Vec<String>,
    on_inspect: EventHandler<Monster>,
    on_add_condition: EventHandler<(RosterId, String)>,
    on_remove_condition: EventHandler<(RosterId, String)>,
    on_remove: EventHandler<RosterId>,
) -> Element {
    let catalog = use_context::<ConditionsContext>().catalog();
    let mut picked = use_signal(String::new);

    let name = if monster.name.is_empty() {
        "Unnamed creature".to_string()
    } else {
        monster.name.clone()
    };
    let armor_class = monster.primary_armor_class();
    let hit_points = monster.hit_points;
    let available: Vec<(String, String)> = catalog
        .read()
        .options()
        .iter()
        .filter(|o| !conditions.contains(&o.index))
        .map(|o| (o.index.clone(), o.name.clone()))
        .collect();

    rsx! {
        div {
            class: "creature-row",
            div {
                class: "creature-header",
                span { class: "creature-name", "{name}" }
                span { class: "creature-stat", "AC {armor_class}" }
                span { class: "creature-stat", "HP {hit_points}" }
                button {
                    class: "btn btn-small",
                    onclick: move |_| on_inspect.call(monster.clone()),
                    "Info"
                }
                button {
                    class: "btn btn-small",
                    onclick: move |_| on_remove.call(id),
                    "Remove"
                }
            }
            div {
                class: "creature-conditions",
                for condition in conditions {
                    ConditionItem {
                        key: "{condition}",
                        condition_id: condition.clone(),
                        on_delete: move |condition: String| on_remove_condition.call((id, condition)),
                    }
                }
                select {
                    class: "condition-picker",
                    value: "{picked}",
                    onchange: move |e| {
                        let index = e.value();
                        if !index.is_empty() {
                            on_add_condition.call((id, index));
                        }
                        picked.set(String::new());
                    },
                    option { value: "", "Add condition" }
                    for (index, label) in available {
                        option { key: "{index}", value: "{index}", "{label}" }
                    }
                }
            }
        }
    }
}
