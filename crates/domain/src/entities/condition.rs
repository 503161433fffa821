//! Status conditions (poisoned, prone, ...) referenced by identifier.

use serde::{Deserialize, Serialize};

/// One row of the condition lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionOption {
    pub index: String,
    pub name: String,
}

impl ConditionOption {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
        }
    }
}

/// Ordered lookup table of known conditions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCatalog(Vec<ConditionOption>);

impl ConditionCatalog {
    pub fn new(options: Vec<ConditionOption>) -> Self {
        Self(options)
    }

    /// Display name of the first entry whose index matches.
    ///
    /// Unknown identifiers resolve to `None`; callers render an empty label.
    pub fn display_name(&self, index: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|option| option.index == index)
            .map(|option| option.name.as_str())
    }

    pub fn options(&self) -> &[ConditionOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ConditionOption> for ConditionCatalog {
    fn from_iter<I: IntoIterator<Item = ConditionOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Long-form rules text of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionDetail {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
}

impl ConditionDetail {
    /// Paragraphs joined for tooltip display.
    pub fn description(&self) -> String {
        self.desc.join("\n")
    }
}

/// CSS class for a condition badge: lowercased, first whitespace replaced by `-`.
pub fn condition_css_class(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((pos, c)) => {
            let mut class = String::with_capacity(lower.len());
            class.push_str(&lower[..pos]);
            class.push('-');
            class.push_str(&lower[pos + c.len_utf8()..]);
            class
        }
        None => lower,
    }
}
