//! Top-level screens

pub mod dm_view;
pub mod home;
pub mod player_view;

pub use dm_view::DmView;
pub use home::HomeView;
pub use player_view::PlayerView;
