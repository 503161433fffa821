use serde::{Deserialize, Serialize};

/// Reference to another catalog resource (`{index, name, url}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiReference {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl ApiReference {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
            url: String::new(),
        }
    }
}
