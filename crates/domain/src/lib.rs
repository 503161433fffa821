//! Combat Companion domain types.
//!
//! Plain data records consumed by the client forms: monster stat blocks and
//! their sub-records, movement speeds, condition lookups and session metadata.
//! Everything here is immutable-by-convention: updates return new values.

extern crate self as combat_companion_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    condition_css_class, Action, ArmorClass, ConditionCatalog, ConditionDetail, ConditionOption,
    Damage, Monster, Session, SpecialAbility, Usage,
};

pub use error::DomainError;

pub use ids::SessionId;

pub use value_objects::{
    coerce_int, ApiReference, DiceExpression, DiceParseError, Speed, SpeedKind,
    SPEED_UNIT_SUFFIX,
};
