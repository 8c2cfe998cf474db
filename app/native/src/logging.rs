//! Log output for the CLI.
//!
//! Logs go to stderr so that stdout stays parseable when `--json` is used.
//! The filter comes from `TILEPAD_LOG` (`EnvFilter` syntax); without it only
//! warnings are shown, or debug output when `--verbose` is passed.

use tracing_subscriber::EnvFilter;

use crate::constants::{APP_NAME, LOG_ENV_VAR};

/// Returns the filter directive used when `TILEPAD_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{APP_NAME}_lib={level},{APP_NAME}={level}")
}

/// Builds the log filter from the environment.
///
/// `--verbose` wins over `TILEPAD_LOG`. An unparsable `TILEPAD_LOG` falls
/// back to the default directive.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(default_directive(true));
    }

    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
}

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
