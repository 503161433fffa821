//! Headless editor state
//!
//! The form components keep one of these in a `Signal` and forward input
//! events to it. Nothing here depends on Dioxus, so the editing rules are
//! unit tested directly.

pub mod entry_list;
pub mod hp_roll;
pub mod monster_draft;
pub mod roster;
pub mod speed_draft;
pub mod top_nav;

pub use entry_list::{AbilityListDraft, ActionListDraft, EntryListDraft, NamedEntry};
pub use hp_roll::HitPointsRoll;
pub use monster_draft::{HpRollOutcome, MonsterDraft};
pub use roster::{CombatRoster, RosterEntry, RosterId};
pub use speed_draft::{SpeedDraft, SpeedEditMode};
pub use top_nav::{FeedReaction, MenuItem, TopNavModel};
