//! HTTP adapters implementing `RawApiPort`
//!
//! One adapter per remote service; each is bound to a base URL and joins it
//! with the relative paths services pass in.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::HttpApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::HttpApiAdapter;

/// Join a base URL and an absolute path without doubling the slash.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
