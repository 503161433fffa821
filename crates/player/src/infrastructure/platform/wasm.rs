//! Browser platform implementation
//!
//! Storage is the tab's `sessionStorage`, so the player name is scoped to the
//! browser session the way the join page stores it.

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct WasmPlatform;

impl WasmPlatform {
    fn session_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl PlatformPort for WasmPlatform {
    fn storage_save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::session_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "Failed to write sessionStorage");
            }
        }
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        Self::session_storage()?.get_item(key).ok()?
    }

    fn storage_remove(&self, key: &str) {
        if let Some(storage) = Self::session_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn log_info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn log_error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn log_debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn log_warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }

    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn navigate_to(&self, url: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.location().set_href(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(url, error = ?e, "Failed to navigate");
                false
            }
        }
    }
}

pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
