//! PlatformPort - Unified platform services interface
//!
//! This trait provides a single injectable interface for the platform-specific
//! operations the UI layer needs (storage, logging, page title, redirects).
//! The concrete implementations live in `infrastructure::platform`.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

/// Unified platform services port
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    /// Display name the viewer entered when joining, empty if unknown
    fn player_name(&self) -> String {
        self.storage_load(storage_keys::PLAYER_NAME)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    fn log_info(&self, msg: &str);

    /// Log an error message
    fn log_error(&self, msg: &str);

    /// Log a debug message
    fn log_debug(&self, msg: &str);

    /// Log a warning message
    fn log_warn(&self, msg: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Leave the app for an absolute URL.
    ///
    /// Returns `false` when the platform cannot leave the app (desktop); the
    /// caller then falls back to in-app routing.
    fn navigate_to(&self, url: &str) -> bool;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const PLAYER_NAME: &str = "combat_companion_name";
    pub const LAST_SESSION: &str = "combat_companion_last_session";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryPlatform {
        values: Mutex<HashMap<String, String>>,
    }

    impl PlatformPort for MemoryPlatform {
        fn storage_save(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn storage_load(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn storage_remove(&self, key: &str) {
            self.values.lock().unwrap().remove(key);
        }

        fn log_info(&self, _msg: &str) {}
        fn log_error(&self, _msg: &str) {}
        fn log_debug(&self, _msg: &str) {}
        fn log_warn(&self, _msg: &str) {}
        fn set_page_title(&self, _title: &str) {}

        fn navigate_to(&self, _url: &str) -> bool {
            false
        }
    }

    #[test]
    fn player_name_reads_storage_key() {
        let platform = MemoryPlatform::default();
        assert_eq!(platform.player_name(), "");

        platform.storage_save(storage_keys::PLAYER_NAME, "Mira");
        assert_eq!(platform.player_name(), "Mira");
    }
}
