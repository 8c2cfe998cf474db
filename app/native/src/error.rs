//! Error types for Tilepad.
//!
//! This module provides the application-level error returned by the CLI.
//! Layout and configuration failures are folded into it so `main` has a
//! single type to report.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::layout::LayoutError;

/// Errors that can occur during application execution.
///
/// Serializes as `{ "kind": ..., "message": ... }` for `--json` output.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum TilepadError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Layout engine error.
    #[error("Layout error: {0}")]
    LayoutError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

/// Result type alias for application operations.
pub type TilepadResult<T> = Result<T, TilepadError>;

impl From<std::io::Error> for TilepadError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TilepadError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<LayoutError> for TilepadError {
    fn from(err: LayoutError) -> Self { Self::LayoutError(err.to_string()) }
}

impl From<ConfigError> for TilepadError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for TilepadError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for TilepadError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
