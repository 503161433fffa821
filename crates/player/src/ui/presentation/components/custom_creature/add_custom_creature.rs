//! Custom creature panel
//!
//! Lists the custom monsters already saved for this session. Picking one
//! loads it as the form's initial value; the blank entry goes back to the
//! template.

use combat_companion_domain::Monster;
use combat_companion_shared::CustomMonsterOption;
use dioxus::prelude::*;

use super::CustomMonsterForm;
use crate::infrastructure::spawn_task;
use crate::presentation::services::use_custom_monster_service;
use crate::presentation::state::SessionContext;

#[derive(Props, Clone, PartialEq)]
pub struct AddCustomCreatureProps {
    pub on_add: EventHandler<Monster>,
}

#[component]
pub fn AddCustomCreature(props: AddCustomCreatureProps) -> Element {
    let session_ctx = use_context::<SessionContext>();
    let service = use_custom_monster_service();

    let mut options: Signal<Vec<CustomMonsterOption>> = use_signal(Vec::new);
    let mut selected = use_signal(String::new);
    let mut initial = use_signal(Monster::custom_template);

    {
        let svc = service.clone();
        let session_id = session_ctx.session_id.clone();
        use_effect(move || {
            let svc = svc.clone();
            let session_id = session_id.clone();
            spawn_task(async move {
                match svc.list_custom_monsters(&session_id).await {
                    Ok(list) => options.set(list),
                    Err(e) => {
                        tracing::warn!(error = %e, session = %session_id, "Failed to list custom monsters")
                    }
                }
            });
        });
    }

    let on_pick = {
        let svc = service.clone();
        let session_id = session_ctx.session_id.clone();
        move |e: FormEvent| {
            let index = e.value();
            selected.set(index.clone());
            if index.is_empty() {
                initial.set(Monster::custom_template());
                return;
            }
            let svc = svc.clone();
            let session_id = session_id.clone();
            spawn_task(async move {
                match svc.get_custom_monster(&session_id, &index).await {
                    Ok(Some(monster)) => initial.set(monster),
                    Ok(None) => tracing::warn!(monster = %index, "Custom monster no longer exists"),
                    Err(e) => tracing::warn!(error = %e, monster = %index, "Failed to load custom monster"),
                }
            });
        }
    };

    let on_add = props.on_add;
    let current = selected.read().clone();

    rsx! {
        div {
            class: "add-custom-creature",
            if !options.read().is_empty() {
                label {
                    class: "field",
                    span { class: "field-label", "Saved custom monsters" }
                    select {
                        class: "text-input",
                        value: "{current}",
                        onchange: on_pick,
                        option { value: "", selected: current.is_empty(), "New custom monster" }
                        for opt in options.read().iter() {
                            option {
                                key: "{opt.index}",
                                value: "{opt.index}",
                                selected: opt.index == current,
                                "{opt.name}"
                            }
                        }
                    }
                }
            }
            CustomMonsterForm {
                current_monster: initial.read().clone(),
                on_add: move |monster: Monster| {
                    // back to the template so picking the same monster reloads it
                    selected.set(String::new());
                    initial.set(Monster::custom_template());
                    on_add.call(monster);
                },
            }
        }
    }
}
