//! Session Service - session metadata and lifecycle
//!
//! The session server answers `GET /sessions/{id}` with a list; callers only
//! ever care about the first record.

use combat_companion_domain::{Session, SessionId};
use combat_companion_shared::paths;

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Session service for loading and ending sessions
#[derive(Clone)]
pub struct SessionService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> SessionService<A> {
    /// Create a new SessionService with the given API port
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Load the session record; `None` when the server returns an empty list
    pub async fn get_single_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Session>, ServiceError> {
        let sessions: Vec<Session> = self.api.get(&paths::session(session_id)).await?;
        Ok(sessions.into_iter().next())
    }

    /// Ask the server to end the session
    pub async fn end_session(&self, session_id: &SessionId) -> Result<(), ServiceError> {
        self.api.post_empty(&paths::end_session(session_id)).await?;
        tracing::info!(session = %session_id, "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> SessionService<Api> {
        SessionService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn single_session_keeps_first_record() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/sessions/abc")
            .times(1)
            .returning(|_| {
                Ok(json!([
                    {"session_id": "abc", "session_name": "Goblin Ambush"},
                    {"session_id": "abc", "session_name": "Stale copy"}
                ]))
            });

        let session = service(raw)
            .get_single_session(&SessionId::from("abc"))
            .await
            .unwrap();
        assert_eq!(
            session,
            Some(Session::new(SessionId::from("abc"), "Goblin Ambush"))
        );
    }

    #[tokio::test]
    async fn empty_list_is_no_session() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| Ok(json!([])));

        let session = service(raw)
            .get_single_session(&SessionId::from("abc"))
            .await
            .unwrap();
        assert_eq!(session, None);
    }

    #[tokio::test]
    async fn end_session_posts_to_end_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty()
            .withf(|path| path == "/sessions/abc/end")
            .times(1)
            .returning(|_| Ok(()));

        service(raw)
            .end_session(&SessionId::from("abc"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));

        let err = service(raw)
            .end_session(&SessionId::from("abc"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Api(ApiError::RequestFailed("connection refused".into()))
        );
    }
}
