//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file management commands
//! - `layout` - Display, template and layout commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config;
use crate::constants::APP_NAME;
use crate::error::{TilepadError, TilepadResult};

pub mod config_cmd;
pub mod layout;

pub use config_cmd::ConfigCommands;
pub use layout::{ApplyArgs, DisplaysArgs, TargetArgs, TemplatesArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tilepad CLI - arrange windows into grid layouts.
#[derive(Parser, Debug)]
#[command(name = "tilepad")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr.
    ///
    /// Overrides the TILEPAD_LOG filter.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// List displays as shown in the display picker.
    ///
    /// The display holding the focused window is preselected.
    #[command(after_long_help = r#"Examples:
  tilepad displays --snapshot desk.json          # Table of displays
  tilepad displays --snapshot desk.json --json   # Picker entries as JSON"#)]
    Displays(DisplaysArgs),

    /// List the available layout templates.
    ///
    /// Built-in templates come first, followed by the templates from the
    /// configuration file.
    Templates(TemplatesArgs),

    /// Show the frames a template resolves to.
    ///
    /// Frames are computed against the work area of the selected display.
    #[command(after_long_help = r#"Examples:
  tilepad resolve halves --snapshot desk.json                # On the focused window's display
  tilepad resolve thirds --snapshot desk.json --display 2    # On display 2"#)]
    Resolve(TargetArgs),

    /// Arrange the snapshot windows into a template.
    ///
    /// The focused window takes the first slot. Missing windows are created
    /// and windows without a slot are minimized.
    #[command(after_long_help = r#"Examples:
  tilepad apply quarters --snapshot desk.json             # Apply and show the result
  tilepad apply quarters --snapshot desk.json --dry-run   # Only show the plan
  tilepad apply --snapshot desk.json --json               # Apply defaultTemplate, JSON output"#)]
    Apply(ApplyArgs),

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Tilepad configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Tilepad configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(tilepad completions --shell zsh)"
    ///   tilepad completions --shell bash > ~/.local/share/bash-completion/completions/tilepad
    ///   tilepad completions --shell fish > ~/.config/fish/completions/tilepad.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub async fn execute(&self) -> TilepadResult<()> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(TilepadError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path.clone());
        }

        match &self.command {
            Commands::Displays(args) => layout::execute_displays(args).await,
            Commands::Templates(args) => layout::execute_templates(args),
            Commands::Resolve(args) => layout::execute_resolve(args).await,
            Commands::Apply(args) => layout::execute_apply(args).await,
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", config::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}
