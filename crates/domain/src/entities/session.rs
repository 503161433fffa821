use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Metadata of a running combat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,
    #[serde(default)]
    pub session_name: String,
}

impl Session {
    pub fn new(session_id: impl Into<SessionId>, session_name: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            session_name: session_name.into(),
        }
    }
}
