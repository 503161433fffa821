//! Combat Companion - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use combat_companion_player::application::api::Api;
use combat_companion_player::infrastructure::http_client::HttpApiAdapter;
use combat_companion_player::infrastructure::ClientConfig;
use combat_companion_player::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "combat_companion_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Combat Companion");

    let config = ClientConfig::from_env();
    tracing::debug!(
        api = %config.api_base_url,
        conditions = %config.conditions_api_url,
        feed = %config.feed_url,
        developer_ui = config.developer_ui,
        "Loaded client configuration"
    );

    // Platform
    let platform = combat_companion_player::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP: session server and rules catalog
    let session_raw: Arc<dyn RawApiPort> = Arc::new(HttpApiAdapter::new(
        &config.api_base_url,
        config.request_timeout_ms,
    ));
    let catalog_raw: Arc<dyn RawApiPort> = Arc::new(HttpApiAdapter::new(
        &config.conditions_api_url,
        config.request_timeout_ms,
    ));
    let services = combat_companion_player::ui::presentation::Services::new(
        Api::new(session_raw),
        Api::new(catalog_raw),
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config)
        .with_context(services)
        .launch(combat_companion_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
