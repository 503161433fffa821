//! Component-scoped task spawning
//!
//! Tasks run on the Dioxus runtime and are dropped with the component that
//! spawned them, so a reply that arrives after unmount is never applied.

use dioxus::core::Task;
use dioxus::prelude::spawn;
use std::future::Future;

/// Spawn `future` on the current component's scope.
///
/// Must be called from inside a Dioxus runtime (event handler, effect or hook).
pub fn spawn_task<F>(future: F) -> Task
where
    F: Future<Output = ()> + 'static,
{
    spawn(future)
}
