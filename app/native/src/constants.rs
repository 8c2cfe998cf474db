//! Application-wide constants.

/// Application name used in log prefixes and config directories.
pub const APP_NAME: &str = "tilepad";

/// Environment variable holding the log filter (e.g. `tilepad=debug`).
pub const LOG_ENV_VAR: &str = "TILEPAD_LOG";

/// Environment variable holding the default snapshot file for CLI commands.
pub const SNAPSHOT_ENV_VAR: &str = "TILEPAD_SNAPSHOT";

/// User-facing strings shown by the display picker.
pub mod messages {
    /// Prefix of the generated label for displays without a name.
    pub const DISPLAY: &str = "Display";

    /// Placeholder shown when no display could be read.
    pub const NO_DISPLAY: &str = "No display found";
}
