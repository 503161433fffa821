//! Condition Service - condition catalog lookups
//!
//! Talks to the rules catalog API, which lives at its own base URL; the
//! composition root hands this service an `Api` built for that host.

use combat_companion_domain::{ConditionCatalog, ConditionDetail};
use combat_companion_shared::{paths, ConditionListResponse};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct ConditionService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ConditionService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Load the identifier -> display name table
    pub async fn list_conditions(&self) -> Result<ConditionCatalog, ServiceError> {
        let response: ConditionListResponse = self.api.get(&paths::conditions()).await?;
        tracing::debug!(count = response.count, "Loaded condition catalog");
        Ok(response.into())
    }

    /// Fetch the rules text of one condition
    pub async fn get_condition(&self, index: &str) -> Result<ConditionDetail, ServiceError> {
        Ok(self.api.get(&paths::condition(index)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> ConditionService<Api> {
        ConditionService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn list_conditions_builds_catalog() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/api/conditions")
            .returning(|_| {
                Ok(json!({
                    "count": 2,
                    "results": [
                        {"index": "poisoned", "name": "Poisoned", "url": "/api/conditions/poisoned"},
                        {"index": "prone", "name": "Prone", "url": "/api/conditions/prone"}
                    ]
                }))
            });

        let catalog = service(raw).list_conditions().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.display_name("prone"), Some("Prone"));
    }

    #[tokio::test]
    async fn get_condition_returns_description() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/api/conditions/poisoned")
            .returning(|_| {
                Ok(json!({
                    "index": "poisoned",
                    "name": "Poisoned",
                    "desc": ["- A poisoned creature has disadvantage on attack rolls."]
                }))
            });

        let detail = service(raw).get_condition("poisoned").await.unwrap();
        assert_eq!(
            detail.description(),
            "- A poisoned creature has disadvantage on attack rolls."
        );
    }

    #[tokio::test]
    async fn unknown_condition_is_not_found() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|path| Err(ApiError::from_status(404, path)));

        let err = service(raw).get_condition("petrified").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
