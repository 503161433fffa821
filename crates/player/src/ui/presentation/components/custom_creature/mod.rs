//! Custom creature editors
//!
//! Thin Dioxus shells around the headless drafts in
//! `application::editing`. Each component owns its draft in a `Signal` and
//! hands fresh values to its parent through an `EventHandler`.

mod add_custom_creature;
mod entry_lists;
mod monster_form;
mod speed;

pub use add_custom_creature::AddCustomCreature;
pub use entry_lists::{CustomAbilities, CustomActions};
pub use monster_form::CustomMonsterForm;
pub use speed::CustomSpeed;
