//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - Tables for structured data display
//! - JSON syntax highlighting

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;
use tabled::Table;
use tabled::settings::Style;

use crate::error::TilepadResult;

/// Prints a value as JSON with syntax highlighting.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> TilepadResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", highlight_json(&json));
    Ok(())
}

/// Prints rows as a rounded table.
pub fn print_table<I, T>(rows: I)
where
    I: IntoIterator<Item = T>,
    T: tabled::Tabled,
{
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

/// Colors a pretty-printed JSON string.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (default)
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut in_string = false;
    let mut is_key = false;
    let mut escape_next = false;
    let mut current_token = String::new();
    let mut after_colon = false;

    for ch in json.chars() {
        if escape_next {
            current_token.push(ch);
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            current_token.push(ch);
            escape_next = true;
            continue;
        }

        match ch {
            '"' if in_string => {
                current_token.push(ch);
                let colored = if is_key {
                    current_token.cyan()
                } else {
                    current_token.green()
                };
                let _ = write!(out, "{colored}");
                current_token.clear();
                in_string = false;
                is_key = false;
            }
            '"' => {
                flush_token(&mut out, &mut current_token, after_colon);
                current_token.push(ch);
                in_string = true;
                // Strings before a colon are keys
                is_key = !after_colon;
                after_colon = false;
            }
            ':' if !in_string => {
                flush_token(&mut out, &mut current_token, false);
                let _ = write!(out, "{}", ":".white());
                after_colon = true;
            }
            ',' if !in_string => {
                flush_token(&mut out, &mut current_token, after_colon);
                let _ = write!(out, "{}", ",".white());
                after_colon = false;
            }
            '{' | '}' | '[' | ']' if !in_string => {
                flush_token(&mut out, &mut current_token, after_colon);
                let _ = write!(out, "{}", ch.to_string().white().bold());
                after_colon = false;
            }
            _ => current_token.push(ch),
        }
    }

    flush_token(&mut out, &mut current_token, after_colon);
    out
}

/// Writes the pending token, coloring it when it is a bare value.
fn flush_token(out: &mut String, token: &mut String, is_value: bool) {
    if token.is_empty() {
        return;
    }

    if is_value && !token.trim().is_empty() {
        let start = token.find(|c: char| !c.is_whitespace()).unwrap_or(0);
        let end = token.rfind(|c: char| !c.is_whitespace()).map_or(token.len(), |i| i + 1);

        let prefix = &token[..start];
        let value = &token[start..end];
        let suffix = &token[end..];

        if value == "true" || value == "false" || value == "null" {
            let _ = write!(out, "{prefix}{}{suffix}", value.magenta());
        } else if value.parse::<f64>().is_ok() {
            let _ = write!(out, "{prefix}{}{suffix}", value.yellow());
        } else {
            out.push_str(token);
        }
    } else {
        out.push_str(token);
    }

    token.clear();
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
///
/// Counts characters rather than bytes.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        "…".to_string()
    } else {
        let truncate_at = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
        format!("{}…", &s[..truncate_at])
    }
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_json_keeps_text_without_colors() {
        colored::control::set_override(false);
        let json = "{\n  \"name\": \"halves\",\n  \"slots\": 2,\n  \"ok\": true\n}";
        assert_eq!(highlight_json(json), json);
    }

    #[test]
    fn test_highlight_json_handles_escaped_quotes() {
        colored::control::set_override(false);
        let json = r#"{"label": "say \"hi\""}"#;
        assert_eq!(highlight_json(json), json);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_min_length() {
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn test_truncate_multibyte_utf8() {
        let s = "Wide window · narrow column";
        assert_eq!(truncate(s, 14), "Wide window ·…");
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }
}
