//! Context state shared by the session screens

pub mod conditions_state;
pub mod session_state;

pub use conditions_state::ConditionsContext;
pub use session_state::{FeedState, SessionContext};
