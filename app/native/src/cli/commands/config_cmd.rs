//! Config CLI commands.
//!
//! Commands for managing the Tilepad configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::config::{self, config_paths, create_config_file, generate_config_template};
use crate::error::{TilepadError, TilepadResult};

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a new configuration file at the default location with all
    /// available options commented out.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  tilepad config init                            # Create config at default location
  tilepad config init --force                    # Overwrite existing config
  tilepad config init --path ~/my-config.jsonc   # Create at custom path
  tilepad config init --stdout                   # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/tilepad/config.jsonc
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Tilepad looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> TilepadResult<()> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                let target = path
                    .clone()
                    .or_else(config::init_target_path)
                    .unwrap_or_else(|| PathBuf::from("config.jsonc"));
                init_config(&target, *force)
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Writes the configuration template to `path`.
fn init_config(path: &Path, force: bool) -> TilepadResult<()> {
    if path.exists() && !force {
        return Err(TilepadError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    create_config_file(path).map_err(|e| {
        TilepadError::ConfigError(format!("Failed to create config file {}: {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), "config: created configuration file");
    println!("Configuration file created at: {}", path.display());
    println!("\nAll options are commented out by default.");
    println!("Edit the file and uncomment the options you want to configure.");

    Ok(())
}

/// Whether a search path holds the loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStatus {
    Active,
    Exists,
    Missing,
}

fn path_status(path: &Path, active: Option<&Path>) -> PathStatus {
    if active == Some(path) {
        PathStatus::Active
    } else if path.exists() {
        PathStatus::Exists
    } else {
        PathStatus::Missing
    }
}

/// Prints the configuration search paths, marking the loaded one.
fn show_config_path() {
    config::get_config();
    let active = config::get_config_path().map(PathBuf::as_path);

    if let Some(custom) = config::custom_config_path() {
        println!("Using configuration file from --config:\n");
        println!("  {}", custom.display());
        if active.is_none() {
            println!("\n{}", "The file could not be loaded, defaults are in use.".yellow());
        }
        return;
    }

    println!("Configuration file search paths (in priority order):\n");

    for (i, path) in config_paths().iter().enumerate() {
        let marker = match path_status(path, active) {
            PathStatus::Active => " (active)".green().to_string(),
            PathStatus::Exists => " (exists)".dimmed().to_string(),
            PathStatus::Missing => String::new(),
        };

        println!("  {}. {}{marker}", i + 1, path.display());
    }

    if active.is_none() {
        println!("\nNo configuration file loaded.");
        println!("Run 'tilepad config init' to create one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_status_marks_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = dir.path().join("config.jsonc");
        let broken = dir.path().join("config.json");
        let missing = dir.path().join("missing.jsonc");
        std::fs::write(&loaded, "{}").unwrap();
        std::fs::write(&broken, "{").unwrap();

        let active = Some(loaded.as_path());
        assert_eq!(path_status(&loaded, active), PathStatus::Active);
        assert_eq!(path_status(&broken, active), PathStatus::Exists);
        assert_eq!(path_status(&missing, active), PathStatus::Missing);
        assert_eq!(path_status(&loaded, None), PathStatus::Exists);
    }

    #[test]
    fn test_init_config_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");

        init_config(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{}").unwrap();

        let err = init_config(&path, false).unwrap_err();
        assert!(matches!(err, TilepadError::ConfigError(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        init_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), generate_config_template());
    }
}
