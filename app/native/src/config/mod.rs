//! Configuration module for Tilepad.
//!
//! This module provides the configuration types, loading functionality, the
//! commented template written by `tilepad config init`, and the JSON schema.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod schema;
pub mod template;
pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use schema::{SCHEMA_ID, generate_schema, generate_schema_json};
pub use template::{create_config_file, generate_config_template};
pub use types::{
    ConfigError, TilepadConfig, config_paths, load_config as load_config_default,
    load_config_from_path, parse_config,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<TilepadConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// Returns `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Returns the custom configuration path, if one was set.
pub fn custom_config_path() -> Option<&'static PathBuf> { CUSTOM_CONFIG_PATH.get() }

/// Loads the configuration from disk.
///
/// Returns the loaded configuration, or a default configuration if loading fails.
fn load_or_default() -> TilepadConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "config: loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("config: no configuration file found, using defaults");
            TilepadConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "config: failed to load configuration, using defaults");
            TilepadConfig::default()
        }
    }
}

/// Returns the global configuration instance, initializing it if necessary.
///
/// If no configuration file is found, returns the default configuration.
pub fn get_config() -> &'static TilepadConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
///
/// `None` until [`get_config`] has run, and when no file could be loaded.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

/// Returns the path `tilepad config init` writes to.
///
/// The custom path when one was set, otherwise the first search location.
#[must_use]
pub fn init_target_path() -> Option<PathBuf> {
    custom_config_path().cloned().or_else(|| config_paths().into_iter().next())
}
