//! Service providers for the presentation layer
//!
//! Components use the hooks below to reach application services without
//! depending on infrastructure adapter types.
//!
//! Session and custom-monster services talk to the session server. The
//! condition service talks to the rules catalog, which lives at its own base
//! URL, so the bundle is built from two `ApiPort` values.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ConditionService, CustomMonsterService, SessionService};
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub session: Arc<SessionService<A>>,
    pub custom_monsters: Arc<CustomMonsterService<A>>,
    pub conditions: Arc<ConditionService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// # Arguments
    /// * `session_api` - port bound to the session server
    /// * `catalog_api` - port bound to the conditions catalog
    pub fn new(session_api: A, catalog_api: A) -> Self {
        Self {
            session: Arc::new(SessionService::new(session_api.clone())),
            custom_monsters: Arc::new(CustomMonsterService::new(session_api)),
            conditions: Arc::new(ConditionService::new(catalog_api)),
        }
    }
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> Arc<SessionService<Api>> {
    let services = use_context::<UiServices>();
    services.session.clone()
}

/// Hook to access the CustomMonsterService from context
pub fn use_custom_monster_service() -> Arc<CustomMonsterService<Api>> {
    let services = use_context::<UiServices>();
    services.custom_monsters.clone()
}

/// Hook to access the ConditionService from context
pub fn use_condition_service() -> Arc<ConditionService<Api>> {
    let services = use_context::<UiServices>();
    services.conditions.clone()
}
