//! Application services
//!
//! Services implement the client's use cases. They depend on the `ApiPort`
//! trait, not on concrete infrastructure adapters.

pub mod condition_service;
pub mod custom_monster_service;
pub mod session_service;

pub use condition_service::ConditionService;
pub use custom_monster_service::CustomMonsterService;
pub use session_service::SessionService;
