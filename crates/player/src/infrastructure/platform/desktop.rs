//! Desktop platform implementation
//!
//! Storage is a JSON file under the user's config directory, logging goes
//! through tracing, and there is no browser to redirect.

use crate::ports::outbound::PlatformPort;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Desktop storage with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/combat-companion/player/storage.json
/// - macOS: ~/Library/Application Support/io.combat-companion.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\combat-companion\player\storage.json
#[derive(Clone)]
pub struct DesktopStorage {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorage {
    /// Open the storage file in the platform config directory
    pub fn new() -> Self {
        let storage_path =
            if let Some(dirs) = ProjectDirs::from("io", "combat-companion", "player") {
                dirs.config_dir().join("storage.json")
            } else {
                // Fallback to current directory if project dirs unavailable
                PathBuf::from("combat_companion_storage.json")
            };
        Self::at_path(storage_path)
    }

    /// Open (or create on first write) a storage file at `storage_path`
    pub fn at_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }

    pub fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    pub fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop implementation of `PlatformPort`
#[derive(Clone, Default)]
pub struct DesktopPlatform {
    storage: DesktopStorage,
}

impl DesktopPlatform {
    pub fn new(storage: DesktopStorage) -> Self {
        Self { storage }
    }
}

impl PlatformPort for DesktopPlatform {
    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value);
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key);
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

    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is managed by OS/Dioxus desktop
    }

    fn navigate_to(&self, url: &str) -> bool {
        // The desktop window cannot leave the app; the caller routes internally
        tracing::info!(url, "External navigation requested on desktop");
        false
    }
}

/// Create the desktop platform with storage in the user's config directory
pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform::new(DesktopStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::storage_keys;

    fn temp_storage_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("combat-companion-test-{}", std::process::id()))
            .join(format!("{}.json", name))
    }

    #[test]
    fn values_survive_reopen() {
        let path = temp_storage_path("reopen");
        let _ = fs::remove_file(&path);

        let storage = DesktopStorage::at_path(path.clone());
        storage.save(storage_keys::PLAYER_NAME, "Mira");
        storage.save("other", "value");
        storage.remove("other");

        let reopened = DesktopStorage::at_path(path.clone());
        assert_eq!(reopened.load(storage_keys::PLAYER_NAME).as_deref(), Some("Mira"));
        assert_eq!(reopened.load("other"), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn platform_reads_player_name_and_never_leaves_app() {
        let path = temp_storage_path("platform");
        let _ = fs::remove_file(&path);

        let platform = DesktopPlatform::new(DesktopStorage::at_path(path.clone()));
        assert_eq!(platform.player_name(), "");
        platform.storage_save(storage_keys::PLAYER_NAME, "Dungeon Master");
        assert_eq!(platform.player_name(), "Dungeon Master");
        assert!(!platform.navigate_to("http://localhost:3000"));

        let _ = fs::remove_file(&path);
    }
}
