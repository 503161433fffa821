//! Presentation components

pub mod conditions;
pub mod custom_creature;
pub mod monster_dialog;
pub mod top_nav;

pub use conditions::{ConditionBadge, ConditionItem};
pub use custom_creature::{
    AddCustomCreature, CustomAbilities, CustomActions, CustomMonsterForm, CustomSpeed,
};
pub use monster_dialog::MonsterInfoDialog;
pub use top_nav::TopNav;
