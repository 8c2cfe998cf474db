//! Display geometry snapshots.
//!
//! A [`Display`] is one physical monitor as reported by the display provider:
//! its full bounds plus the work area left after the OS reserves space for
//! taskbars and docks. Displays are fetched once per session and never change
//! afterwards.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::constants::messages;

/// Represents a physical display/monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Provider-assigned identifier for the display.
    pub id: String,
    /// Human-readable name, empty when the provider reports none.
    #[serde(default)]
    pub name: String,
    /// The full frame of the display in global coordinates.
    pub bounds: Rect,
    /// The usable frame (excluding taskbars and docks).
    pub work_area: Rect,
}

impl Display {
    /// Creates a new display.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, bounds: Rect, work_area: Rect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bounds,
            work_area,
        }
    }

    /// Returns the label shown in the display picker.
    ///
    /// Uses the display name when present, otherwise a generated
    /// `"Display (W x H)"` label from the full bounds.
    #[must_use]
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!(
                "{} ({} x {})",
                messages::DISPLAY,
                self.bounds.width,
                self.bounds.height
            )
        } else {
            self.name.clone()
        }
    }

    /// Returns whether the work area lies within the display bounds.
    #[must_use]
    pub const fn is_consistent(&self) -> bool { self.bounds.contains_rect(&self.work_area) }
}

/// Logs displays whose work area escapes their bounds.
///
/// Providers are trusted; an inconsistent display is still used as reported.
pub fn warn_inconsistent(displays: &[Display]) {
    for d in displays.iter().filter(|d| !d.is_consistent()) {
        tracing::warn!(
            display = %d.id,
            bounds = %d.bounds,
            work_area = %d.work_area,
            "layout: display work area is not contained in its bounds"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Display {
        Display::new(
            "1",
            "",
            Rect::new(0, 0, 1440, 900),
            Rect::new(25, 0, 1440, 875),
        )
    }

    #[test]
    fn test_label_uses_name_when_present() {
        let display = Display {
            name: "DELL U2719D".to_string(),
            ..laptop()
        };
        assert_eq!(display.label(), "DELL U2719D");
    }

    #[test]
    fn test_label_falls_back_to_dimensions() {
        assert_eq!(laptop().label(), "Display (1440 x 900)");
    }

    #[test]
    fn test_consistency_check() {
        assert!(laptop().is_consistent());

        let broken = Display {
            work_area: Rect::new(0, 0, 1600, 900),
            ..laptop()
        };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn test_display_deserializes_without_name() {
        let json = r#"{
            "id": "69733248",
            "bounds": { "top": 0, "left": 0, "width": 2560, "height": 1440 },
            "workArea": { "top": 0, "left": 0, "width": 2560, "height": 1400 }
        }"#;

        let display: Display = serde_json::from_str(json).unwrap();
        assert_eq!(display.id, "69733248");
        assert!(display.name.is_empty());
        assert_eq!(display.work_area.height, 1400);
    }
}
