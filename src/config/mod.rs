//! Configuration management
//!
//! Every timing the UI simulates lives here so the server, the browser and the
//! tests agree on them. The server loads overrides with the `config` crate and
//! hands the result to the client through the `app_config` server function.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub finder: FinderConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub detail: DetailConfig,
}

/// Mock authentication settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Browser storage key holding the serialized session
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Artificial delay before login/signup resolves
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
}

fn default_storage_key() -> String {
    "cinestream_user".to_string()
}

fn default_auth_delay_ms() -> u64 {
    800
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            auth_delay_ms: default_auth_delay_ms(),
        }
    }
}

/// Scene finder delays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,
    #[serde(default = "default_match_delay_ms")]
    pub match_delay_ms: u64,
}

fn default_upload_delay_ms() -> u64 {
    1000
}

fn default_match_delay_ms() -> u64 {
    2000
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: default_upload_delay_ms(),
            match_delay_ms: default_match_delay_ms(),
        }
    }
}

/// Synthetic player settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Progress timer interval
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Percentage added per tick while playing
    #[serde(default = "default_progress_step")]
    pub progress_step: f64,
    /// Assumed length of every title, used to map timestamps to progress
    #[serde(default = "default_total_secs")]
    pub total_secs: u64,
    /// Idle time before controls auto-hide while playing
    #[serde(default = "default_controls_idle_ms")]
    pub controls_idle_ms: u64,
    /// Rewind/forward step
    #[serde(default = "default_skip_secs")]
    pub skip_secs: u64,
}

fn default_tick_ms() -> u64 {
    500
}

fn default_progress_step() -> f64 {
    0.1
}

fn default_total_secs() -> u64 {
    7200
}

fn default_controls_idle_ms() -> u64 {
    3000
}

fn default_skip_secs() -> u64 {
    10
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            progress_step: default_progress_step(),
            total_secs: default_total_secs(),
            controls_idle_ms: default_controls_idle_ms(),
            skip_secs: default_skip_secs(),
        }
    }
}

/// Movie detail page settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Delay before the mock trailer preview replaces the backdrop
    #[serde(default = "default_trailer_delay_ms")]
    pub trailer_delay_ms: u64,
}

fn default_trailer_delay_ms() -> u64 {
    1000
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            trailer_delay_ms: default_trailer_delay_ms(),
        }
    }
}

static CURRENT: OnceLock<AppConfig> = OnceLock::new();

/// Install the process-wide configuration. Only the first call wins.
pub fn init(config: AppConfig) -> bool {
    CURRENT.set(config).is_ok()
}

/// Installed configuration, or the defaults when nothing was installed.
pub fn current() -> AppConfig {
    CURRENT.get().cloned().unwrap_or_default()
}

/// Get config directory (CINESTREAM_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("CINESTREAM_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/cinestream");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("cinestream");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/cinestream");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("cinestream");
        }
    }

    std::path::PathBuf::from(".")
}

/// Load configuration: defaults, then `config.{toml,json,...}` in the config
/// directory, then `CINESTREAM_*` environment variables
/// (e.g. `CINESTREAM_FINDER__MATCH_DELAY_MS=500`).
#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("CINESTREAM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    tracing::debug!(
        "Loaded config from {} (auth delay {}ms, match delay {}ms)",
        config_dir.display(),
        app_config.session.auth_delay_ms,
        app_config.finder.match_delay_ms
    );
    Ok(app_config)
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        env::set_var("CINESTREAM_CONFIG_DIR", "/tmp/cinestream-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("CINESTREAM_CONFIG_DIR");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "cinestream_user");
        assert_eq!(config.playback.total_secs, 7200);
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_values() {
        env::set_var("CINESTREAM_CONFIG_DIR", "/tmp/cinestream-test-nonexistent");
        env::set_var("CINESTREAM_FINDER__MATCH_DELAY_MS", "250");
        env::set_var("CINESTREAM_SESSION__STORAGE_KEY", "other_key");

        let config = load_config().expect("config should load");

        env::remove_var("CINESTREAM_FINDER__MATCH_DELAY_MS");
        env::remove_var("CINESTREAM_SESSION__STORAGE_KEY");
        env::remove_var("CINESTREAM_CONFIG_DIR");

        assert_eq!(config.finder.match_delay_ms, 250);
        assert_eq!(config.finder.upload_delay_ms, 1000);
        assert_eq!(config.session.storage_key, "other_key");
    }

    #[test]
    #[serial]
    fn test_config_file_in_config_dir() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[playback]\ntick_ms = 250\n\n[detail]\ntrailer_delay_ms = 0\n",
        )
        .expect("write config");

        env::set_var("CINESTREAM_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("CINESTREAM_CONFIG_DIR");

        assert_eq!(config.playback.tick_ms, 250);
        assert_eq!(config.playback.progress_step, 0.1);
        assert_eq!(config.detail.trailer_delay_ms, 0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"session":{"auth_delay_ms":5}}"#).expect("parse");
        assert_eq!(config.session.auth_delay_ms, 5);
        assert_eq!(config.session.storage_key, "cinestream_user");
        assert_eq!(config.finder, FinderConfig::default());
    }
}
