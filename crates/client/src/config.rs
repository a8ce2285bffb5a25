use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `[api] base_url`.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Load the client configuration once and return it. Later calls return the
/// first result.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(read_config)
}

/// Shortcut for the API section of [`load`].
pub fn api() -> ApiConfig {
    load().api.clone()
}

/// Parse `config.toml` contents. A malformed file falls back to defaults.
pub fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply an `API_BASE_URL` value on top of the file config. Blank values are
/// ignored.
pub fn with_base_url_override(mut config: AppConfig, base_url: Option<String>) -> AppConfig {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url;
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse(&contents),
        Err(e) => {
            tracing::info!(error = %e, path = CONFIG_PATH, "Config file not found, using defaults");
            AppConfig::default()
        }
    };
    let config = with_base_url_override(config, std::env::var(BASE_URL_ENV).ok());
    tracing::info!(base_url = %config.api.base_url, "Client configuration loaded");
    config
}

/// The browser has no config file; the origin is fixed at build time.
#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    let base_url = option_env!("API_BASE_URL").unwrap_or(shared_types::DEFAULT_API_BASE_URL);
    AppConfig {
        api: ApiConfig::new(base_url),
    }
}
