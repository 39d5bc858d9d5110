//! Config context for the simulated timings.
//!
//! Starts from the compiled-in defaults and is refreshed from the server's
//! configuration once the client hydrates.

use dioxus::prelude::*;

use crate::config::AppConfig;

/// Global config state shared via context
#[derive(Clone, Copy)]
pub struct ConfigContext {
    config: Signal<AppConfig>,
    /// Whether the server copy has been fetched (or the fetch gave up)
    loaded: Signal<bool>,
}

impl ConfigContext {
    pub fn get(&self) -> AppConfig {
        (self.config)()
    }

    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }
}

/// Server copy of the configuration
#[server]
pub async fn app_config() -> Result<AppConfig, ServerFnError> {
    Ok(crate::config::current())
}

/// Initialize config context provider - call once at app root
pub fn use_config_provider() {
    // The server renders with its installed config; the browser starts from
    // the defaults until the fetch lands
    let mut config = use_signal(crate::config::current);
    let mut loaded = use_signal(|| cfg!(not(target_arch = "wasm32")));

    use_context_provider(|| ConfigContext { config, loaded });

    // Client-side only: pull the server's overrides
    use_effect(move || {
        if *loaded.peek() {
            return;
        }
        spawn(async move {
            match app_config().await {
                Ok(remote) => config.set(remote),
                Err(e) => tracing::warn!("Using default timings, config fetch failed: {}", e),
            }
            loaded.set(true);
        });
    });
}

/// Get config context - use in any component
pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>()
}
