//! Configuration types for Tilepad.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::APP_NAME;
use crate::layout::{LayoutError, LayoutResult, TemplateCatalog, TemplateSpec};

/// Root configuration structure for Tilepad.
///
/// ```jsonc
/// {
///   "defaultTemplate": "editor",
///   "templates": [
///     {
///       "name": "editor",
///       "slots": [
///         { "rowKey": "row_0", "colKey": "keyline_0", "widthClass": "twoThirds", "heightClass": "full" },
///         { "rowKey": "row_0", "colKey": "keyline_66", "widthClass": "third", "heightClass": "full" }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TilepadConfig {
    /// User-defined layout templates.
    ///
    /// Appended after the built-in templates. A template named like a
    /// built-in replaces it.
    pub templates: Vec<TemplateSpec>,

    /// Whether the built-in templates are offered.
    ///
    /// Default: true
    pub include_builtin_templates: bool,

    /// Template applied when `tilepad apply` is called without a name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,
}

impl Default for TilepadConfig {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            include_builtin_templates: true,
            default_template: None,
        }
    }
}

impl TilepadConfig {
    /// Builds the template catalog described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::MalformedTemplate` if a user template is invalid,
    /// and `LayoutError::TemplateNotFound` if `defaultTemplate` names a
    /// template that is not in the catalog.
    pub fn catalog(&self) -> LayoutResult<TemplateCatalog> {
        let catalog = TemplateCatalog::from_specs(&self.templates, self.include_builtin_templates)?;

        if let Some(name) = &self.default_template
            && catalog.get(name).is_err()
        {
            return Err(LayoutError::TemplateNotFound(name.clone()));
        }

        Ok(catalog)
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/tilepad/config.jsonc \
                or ~/.tilepad.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".tilepad.jsonc", ".tilepad.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/tilepad/config.jsonc` when `$XDG_CONFIG_HOME` is set
/// 2. `~/.config/tilepad/config.jsonc`
/// 3. the platform config directory, e.g. `~/Library/Application Support/tilepad/`
/// 4. `~/.tilepad.jsonc` (legacy/simple location)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let mut push_dir = |dir: PathBuf| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        push_dir(PathBuf::from(xdg_config).join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Parses configuration text. Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if the text is not a valid configuration.
pub fn parse_config(text: &str) -> Result<TilepadConfig, ConfigError> {
    let reader = json_comments::StripComments::new(text.as_bytes());
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and
/// `ConfigError::ParseError` if it contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(TilepadConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let config = read_config(path)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(TilepadConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = read_config(&path)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}

fn read_config(path: &Path) -> Result<TilepadConfig, ConfigError> {
    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    Ok(serde_json::from_reader(reader)?)
}
