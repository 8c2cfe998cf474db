//! Configuration template generation.
//!
//! Generates a commented configuration file for `tilepad config init`.

use std::fs;
use std::path::Path;

use super::schema::SCHEMA_ID;

/// Generates a configuration template with every option commented out.
#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"// Tilepad Configuration File
// ==========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure. Every option ends
// with a comma, so "$schema" stays the last member.

{{
  // ============================================================================
  // Templates
  // ============================================================================
  // Offer the built-in templates (full, halves, stacked, thirds, main-left,
  // main-right, quarters, main-left-stacked, main-right-stacked,
  // main-left-third-stacked).
  // "includeBuiltinTemplates": true,

  // Template applied by `tilepad apply` when no name is given.
  // "defaultTemplate": "halves",

  // User templates, appended after the built-ins. A template with the same
  // name as a built-in replaces it.
  //
  // Each slot needs four keys (short aliases in parentheses):
  //   rowKey (y):        "row_0" | "row_50"
  //   colKey (x):        "keyline_0" | "keyline_33" | "keyline_50" | "keyline_66"
  //   widthClass (w):    "full" | "half" | "third" | "twoThirds"
  //   heightClass (h):   "full" | "half"
  //
  // The first slot receives the focused window.
  // "templates": [
  //   {{
  //     "name": "editor",
  //     "description": "Editor with a narrow side column",
  //     "slots": [
  //       {{ "y": "row_0", "x": "keyline_0", "w": "twoThirds", "h": "full" }},
  //       {{ "y": "row_0", "x": "keyline_66", "w": "third", "h": "half" }},
  //       {{ "y": "row_50", "x": "keyline_66", "w": "third", "h": "half" }}
  //     ]
  //   }}
  // ],

  "$schema": "{SCHEMA_ID}"
}}
"#
    )
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
