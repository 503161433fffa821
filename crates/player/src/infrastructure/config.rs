//! Client configuration
//!
//! Desktop builds read environment variables at startup (after loading
//! `.env.local` / `.env` from the repo root). Browser builds have no process
//! environment, so the same names are baked in at compile time.

use combat_companion_domain::SessionId;
use combat_companion_shared::paths;

pub const DEFAULT_CLIENT_BASEURL: &str = "http://localhost:3000";
pub const DEFAULT_API_BASEURL: &str = "http://localhost:5000";
pub const DEFAULT_CONDITIONS_API_URL: &str = "https://www.dnd5eapi.co";
pub const DEFAULT_FEED_WS_URL: &str = "ws://localhost:5000";
/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Public URL of this client; join links and the post-session redirect use it
    pub client_base_url: String,
    /// Session server REST API
    pub api_base_url: String,
    /// Rules catalog API (conditions)
    pub conditions_api_url: String,
    /// Session server WebSocket origin
    pub feed_url: String,
    /// Show operator-only menu entries
    pub developer_ui: bool,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_base_url: DEFAULT_CLIENT_BASEURL.to_string(),
            api_base_url: DEFAULT_API_BASEURL.to_string(),
            conditions_api_url: DEFAULT_CONDITIONS_API_URL.to_string(),
            feed_url: DEFAULT_FEED_WS_URL.to_string(),
            developer_ui: false,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build from a variable lookup, falling back to defaults for anything
    /// unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            client_base_url: get("CLIENT_BASEURL").unwrap_or(defaults.client_base_url),
            api_base_url: get("API_BASEURL").unwrap_or(defaults.api_base_url),
            conditions_api_url: get("CONDITIONS_API_URL").unwrap_or(defaults.conditions_api_url),
            feed_url: get("FEED_WS_URL").unwrap_or(defaults.feed_url),
            developer_ui: get("DEVELOPER_UI").is_some_and(|v| is_truthy(&v)),
            request_timeout_ms: get("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "CLIENT_BASEURL" => option_env!("CLIENT_BASEURL"),
                "API_BASEURL" => option_env!("API_BASEURL"),
                "CONDITIONS_API_URL" => option_env!("CONDITIONS_API_URL"),
                "FEED_WS_URL" => option_env!("FEED_WS_URL"),
                "DEVELOPER_UI" => option_env!("DEVELOPER_UI"),
                "REQUEST_TIMEOUT_MS" => option_env!("REQUEST_TIMEOUT_MS"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// WebSocket URL of a session's feed
    pub fn feed_url_for(&self, session_id: &SessionId) -> String {
        format!(
            "{}{}",
            self.feed_url.trim_end_matches('/'),
            paths::feed(session_id)
        )
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = config(&[
            ("CLIENT_BASEURL", "https://combat.example"),
            ("API_BASEURL", "https://api.combat.example"),
            ("FEED_WS_URL", "wss://api.combat.example/"),
            ("REQUEST_TIMEOUT_MS", "5000"),
        ]);
        assert_eq!(cfg.client_base_url, "https://combat.example");
        assert_eq!(cfg.api_base_url, "https://api.combat.example");
        assert_eq!(cfg.conditions_api_url, DEFAULT_CONDITIONS_API_URL);
        assert_eq!(cfg.request_timeout_ms, 5000);
        assert_eq!(
            cfg.feed_url_for(&SessionId::from("abc")),
            "wss://api.combat.example/ws/abc"
        );
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = config(&[("CLIENT_BASEURL", "  "), ("REQUEST_TIMEOUT_MS", "soon")]);
        assert_eq!(cfg.client_base_url, DEFAULT_CLIENT_BASEURL);
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn developer_flag_accepts_common_truthy_values() {
        for value in ["1", "true", "TRUE", "yes", "On"] {
            assert!(config(&[("DEVELOPER_UI", value)]).developer_ui, "{value}");
        }
        for value in ["0", "false", "off", "", "maybe"] {
            assert!(!config(&[("DEVELOPER_UI", value)]).developer_ui, "{value}");
        }
    }
}
