//! Custom Monster Service - monsters saved to a session
//!
//! The editor can start from a previously saved custom monster instead of the
//! blank template.

use combat_companion_domain::{Monster, SessionId};
use combat_companion_shared::{paths, CustomMonsterOption};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct CustomMonsterService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CustomMonsterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List the custom monsters saved for a session
    pub async fn list_custom_monsters(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<CustomMonsterOption>, ServiceError> {
        Ok(self.api.get(&paths::custom_monsters(session_id)).await?)
    }

    /// Load one saved custom monster, `None` if it was removed
    pub async fn get_custom_monster(
        &self,
        session_id: &SessionId,
        index: &str,
    ) -> Result<Option<Monster>, ServiceError> {
        Ok(self
            .api
            .get_optional(&paths::custom_monster(session_id, index))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::MockRawApiPort;
    use combat_companion_domain::Speed;
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> CustomMonsterService<Api> {
        CustomMonsterService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn lists_saved_monsters() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/sessions/s1/custom-monsters")
            .returning(|_| Ok(json!([{"index": "bog-hag", "name": "Bog Hag"}])));

        let options = service(raw)
            .list_custom_monsters(&SessionId::from("s1"))
            .await
            .unwrap();
        assert_eq!(
            options,
            vec![CustomMonsterOption {
                index: "bog-hag".into(),
                name: "Bog Hag".into()
            }]
        );
    }

    #[tokio::test]
    async fn loads_one_monster() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json()
            .withf(|path| path == "/sessions/s1/custom-monsters/bog-hag")
            .returning(|_| {
                Ok(Some(json!({
                    "index": "bog-hag",
                    "name": "Bog Hag",
                    "hit_points": 52,
                    "speed": {"walk": "30 ft.", "swim": "30 ft."}
                })))
            });

        let monster = service(raw)
            .get_custom_monster(&SessionId::from("s1"), "bog-hag")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(monster.name, "Bog Hag");
        assert_eq!(monster.hit_points, 52);
        assert_eq!(
            monster.speed,
            Speed::walking("30 ft.").with(
                combat_companion_domain::SpeedKind::Swim,
                Some("30 ft.".into())
            )
        );
    }

    #[tokio::test]
    async fn removed_monster_is_none() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| Ok(None));

        let monster = service(raw)
            .get_custom_monster(&SessionId::from("s1"), "gone")
            .await
            .unwrap();
        assert!(monster.is_none());
    }
}
