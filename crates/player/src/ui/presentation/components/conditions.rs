//! Condition chips
//!
//! `ConditionItem` is the chip used on the combat screen; its description is
//! fetched on click and shown as a tooltip. `ConditionBadge` is the older
//! badge that is styled per condition.

use combat_companion_domain::condition_css_class;
use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::services::use_condition_service;
use crate::presentation::state::ConditionsContext;

#[derive(Props, Clone, PartialEq)]
pub struct ConditionItemProps {
    /// Condition index, e.g. `"poisoned"`
    pub condition_id: String,
    pub on_delete: EventHandler<String>,
}

#[component]
pub fn ConditionItem(props: ConditionItemProps) -> Element {
    let conditions = use_context::<ConditionsContext>();
    let condition_service = use_condition_service();

    // Transient; refetched every time the chip is mounted
    let mut description = use_signal(String::new);

    let name = conditions.display_name(&props.condition_id);

    let fetch_description = {
        let condition_id = props.condition_id.clone();
        move |_| {
            let svc = condition_service.clone();
            let condition_id = condition_id.clone();
            spawn_task(async move {
                match svc.get_condition(&condition_id).await {
                    Ok(detail) => description.set(detail.description()),
                    Err(e) => {
                        tracing::warn!(error = %e, condition = %condition_id, "Failed to fetch condition description")
                    }
                }
            });
        }
    };

    let condition_id = props.condition_id.clone();
    let on_delete = props.on_delete;

    rsx! {
        span {
            class: "chip chip-info chip-clickable",
            title: "{description}",
            onclick: fetch_description,
            span {
                class: "chip-label",
                "{name}"
            }
            button {
                class: "chip-delete",
                r#type: "button",
                onclick: move |e| {
                    e.stop_propagation();
                    on_delete.call(condition_id.clone());
                },
                "×"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ConditionBadgeProps {
    /// Id of the creature carrying the condition
    pub id: String,
    pub condition_id: String,
    /// Called with `(id, condition_id)`
    pub on_delete: EventHandler<(String, String)>,
}

#[component]
pub fn ConditionBadge(props: ConditionBadgeProps) -> Element {
    let conditions = use_context::<ConditionsContext>();
    let name = conditions.display_name(&props.condition_id);
    let class = condition_css_class(&name);

    let id = props.id.clone();
    let condition_id = props.condition_id.clone();
    let on_delete = props.on_delete;

    rsx! {
        div {
            class: "condition {class}",
            "{name} "
            button {
                r#type: "button",
                onclick: move |_| on_delete.call((id.clone(), condition_id.clone())),
                "X"
            }
        }
    }
}
