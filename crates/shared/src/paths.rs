//! Path builders for the session server and the condition catalog.
//!
//! Paths are relative to the configured base URL of each service.

use combat_companion_domain::SessionId;

/// `GET` - list holding the session with this id
pub fn session(id: &SessionId) -> String {
    format!("/sessions/{}", id)
}

/// `POST` - end the session
pub fn end_session(id: &SessionId) -> String {
    format!("/sessions/{}/end", id)
}

/// `GET` - custom monsters saved for the session
pub fn custom_monsters(id: &SessionId) -> String {
    format!("/sessions/{}/custom-monsters", id)
}

/// `GET` - one custom monster
pub fn custom_monster(id: &SessionId, index: &str) -> String {
    format!("/sessions/{}/custom-monsters/{}", id, index)
}

/// `GET` - condition catalog listing
pub fn conditions() -> String {
    "/api/conditions".to_string()
}

/// `GET` - long-form description of one condition
pub fn condition(index: &str) -> String {
    format!("/api/conditions/{}", index)
}

/// WebSocket path of the session feed
pub fn feed(id: &SessionId) -> String {
    format!("/ws/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_paths() {
        let id = SessionId::from("abc123");
        assert_eq!(session(&id), "/sessions/abc123");
        assert_eq!(end_session(&id), "/sessions/abc123/end");
        assert_eq!(custom_monster(&id, "owlbear"), "/sessions/abc123/custom-monsters/owlbear");
        assert_eq!(feed(&id), "/ws/abc123");
    }

    #[test]
    fn condition_paths() {
        assert_eq!(conditions(), "/api/conditions");
        assert_eq!(condition("poisoned"), "/api/conditions/poisoned");
    }
}
