//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Locate the configuration file (`--config`, then `YR_CONFIG`, then the default)
//! - ✅ Read TOML into the `AppConfig` DTO with contextual errors
//! - ✅ Apply environment overrides (`YR_API_BASE_URL`)
//!
//! ## Prohibited
//!
//! ❌ **No registration rules**: the event schedule is accepted as written.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use yr_core::config::AppConfig;

pub const CONFIG_PATH_ENV: &str = "YR_CONFIG";
pub const API_BASE_URL_ENV: &str = "YR_API_BASE_URL";
pub const DEFAULT_CONFIG_FILE: &str = "registration.toml";

/// Picks the configuration file: an explicit path wins over `YR_CONFIG`,
/// which wins over `registration.toml` in the working directory.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid configuration.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config = AppConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))?;
    debug!(path = %config_path.display(), days = config.event.days.len(), "config loaded");
    Ok(config)
}

/// Environment values take precedence over the file.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

fn apply_overrides_from(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = lookup(API_BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
        debug!(%base_url, "api base url overridden from environment");
        config.api.base_url = base_url;
    }
}
