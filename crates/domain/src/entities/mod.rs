//! Domain entities

mod condition;
mod monster;
mod session;

pub use condition::{condition_css_class, ConditionCatalog, ConditionDetail, ConditionOption};
pub use monster::{Action, ArmorClass, Damage, Monster, SpecialAbility, Usage};
pub use session::Session;
