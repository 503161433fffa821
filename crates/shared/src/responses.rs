//! REST response shapes
//!
//! Most endpoints return domain records directly (`Vec<Session>`, `Monster`,
//! `ConditionDetail`); the types here cover list envelopes and summary rows.

use serde::{Deserialize, Serialize};

use combat_companion_domain::{ApiReference, ConditionCatalog, ConditionOption};

/// `GET /api/conditions` envelope
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionListResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<ApiReference>,
}

impl From<ConditionListResponse> for ConditionCatalog {
    fn from(response: ConditionListResponse) -> Self {
        response
            .results
            .into_iter()
            .map(|reference| ConditionOption::new(reference.index, reference.name))
            .collect()
    }
}

/// Summary row of a saved custom monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMonsterOption {
    pub index: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_list_converts_in_order() {
        let json = r#"{
            "count": 2,
            "results": [
                {"index": "blinded", "name": "Blinded", "url": "/api/conditions/blinded"},
                {"index": "charmed", "name": "Charmed", "url": "/api/conditions/charmed"}
            ]
        }"#;
        let response: ConditionListResponse = serde_json::from_str(json).unwrap();
        let catalog: ConditionCatalog = response.into();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.options()[0].index, "blinded");
        assert_eq!(catalog.display_name("charmed"), Some("Charmed"));
    }
}
