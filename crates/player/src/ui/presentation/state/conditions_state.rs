use combat_companion_domain::ConditionCatalog;
use dioxus::prelude::*;

/// Condition lookup table shared by every condition chip on screen.
///
/// Empty until the catalog request completes.
#[derive(Clone, Copy)]
pub struct ConditionsContext(pub Signal<ConditionCatalog>);

impl ConditionsContext {
    pub fn new() -> Self {
        Self(Signal::new(ConditionCatalog::default()))
    }

    pub fn catalog(&self) -> Signal<ConditionCatalog> {
        self.0
    }

    /// Display name for `index`, empty when the catalog does not know it.
    pub fn display_name(&self, index: &str) -> String {
        self.0
            .read()
            .display_name(index)
            .map(str::to_string)
            .unwrap_or_default()
    }
}
