//! Cinestream server and web client entry point.

fn main() {
    #[cfg(feature = "server")]
    server::init();

    dioxus::launch(cinestream::app::App);
}

#[cfg(feature = "server")]
mod server {
    use cinestream::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    pub fn init() {
        // Initialize logging
        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "cinestream=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
        if let Err(e) = installed {
            eprintln!("tracing subscriber already installed: {}", e);
        }

        tracing::info!(
            "Starting Cinestream v{} ({})",
            env!("CINESTREAM_VERSION"),
            env!("CINESTREAM_GIT_SHA")
        );
        tracing::info!(
            "Catalog: {} movies, {} scenes",
            env!("CINESTREAM_CATALOG_MOVIES"),
            env!("CINESTREAM_CATALOG_SCENES")
        );

        // Load configuration
        match config::load_config() {
            Ok(app_config) => {
                tracing::info!(
                    "Configuration loaded from {}",
                    config::get_config_dir().display()
                );
                config::init(app_config);
            }
            Err(e) => tracing::warn!("Falling back to default configuration: {}", e),
        }
    }
}
