//! In-memory snapshot environment.
//!
//! A snapshot describes displays and windows as plain JSON (comments allowed):
//!
//! ```jsonc
//! {
//!   "displays": [
//!     {
//!       "id": "main",
//!       "name": "Built-in Retina Display",
//!       "bounds": { "top": 0, "left": 0, "width": 1440, "height": 900 },
//!       "workArea": { "top": 25, "left": 0, "width": 1440, "height": 875 }
//!     }
//!   ],
//!   "windows": [
//!     { "id": 1, "bounds": { "top": 100, "left": 100, "width": 800, "height": 600 } }
//!   ],
//!   "focused": 1
//! }
//! ```
//!
//! [`SnapshotHost`] serves the snapshot through every collaborator trait and
//! applies mutations to its own window table, so a whole layout pass can run
//! and be inspected without a windowing system.

use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::display::Display;
use super::error::{LayoutError, LayoutResult};
use super::geometry::Rect;
use super::provider::{DisplayProvider, WindowMutator, WindowProvider};
use super::reconcile::{WindowId, WindowRecord, WindowState};

/// Serializable description of a display and window environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    /// Connected displays in provider order.
    pub displays: Vec<Display>,
    /// Open windows in provider order.
    pub windows: Vec<WindowRecord>,
    /// Id of the focused window, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<WindowId>,
}

impl Snapshot {
    /// Parses a snapshot from JSON text. Comments are stripped first.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Snapshot` if the text is not a valid snapshot.
    pub fn from_json(text: &str) -> LayoutResult<Self> {
        let reader = json_comments::StripComments::new(text.as_bytes());
        serde_json::from_reader(reader)
            .map_err(|err| LayoutError::snapshot(format!("invalid snapshot: {err}")))
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Snapshot` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            LayoutError::snapshot(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_json(&text)
    }
}

// ============================================================================
// Snapshot Host
// ============================================================================

/// Collaborator implementation backed by a [`Snapshot`].
///
/// Displays are fixed. Windows live in a table that the mutator methods
/// update in place.
#[derive(Debug)]
pub struct SnapshotHost {
    displays: Vec<Display>,
    windows: Mutex<Vec<WindowRecord>>,
    focused: Option<WindowId>,
}

impl SnapshotHost {
    /// Creates a host serving `snapshot`.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            displays: snapshot.displays,
            windows: Mutex::new(snapshot.windows),
            focused: snapshot.focused,
        }
    }

    /// Loads a snapshot file and creates a host serving it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Snapshot` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> LayoutResult<Self> { Snapshot::load(path).map(Self::new) }

    /// Returns the current state of the environment.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            displays: self.displays.clone(),
            windows: self.windows.lock().clone(),
            focused: self.focused,
        }
    }

    /// Returns a copy of the window table.
    #[must_use]
    pub fn windows_now(&self) -> Vec<WindowRecord> { self.windows.lock().clone() }

    fn update(&self, window_id: WindowId, apply: impl FnOnce(&mut WindowRecord)) {
        let mut windows = self.windows.lock();
        if let Some(window) = windows.iter_mut().find(|w| w.id == window_id) {
            apply(window);
        } else {
            tracing::warn!(window_id, "layout: ignoring change to unknown window");
        }
    }
}

impl From<Snapshot> for SnapshotHost {
    fn from(snapshot: Snapshot) -> Self { Self::new(snapshot) }
}

impl DisplayProvider for SnapshotHost {
    async fn displays(&self) -> LayoutResult<Vec<Display>> { Ok(self.displays.clone()) }
}

impl WindowProvider for SnapshotHost {
    async fn windows(&self) -> LayoutResult<Vec<WindowRecord>> { Ok(self.windows_now()) }

    async fn current_window(&self) -> LayoutResult<WindowRecord> {
        let focused = self
            .focused
            .ok_or_else(|| LayoutError::provider("snapshot has no focused window"))?;

        self.windows
            .lock()
            .iter()
            .find(|w| w.id == focused)
            .copied()
            .ok_or_else(|| LayoutError::provider(format!("focused window {focused} is not open")))
    }
}

impl WindowMutator for SnapshotHost {
    fn create_window(&self, frame: Rect) {
        let mut windows = self.windows.lock();
        let id = windows.iter().map(|w| w.id).max().map_or(1, |max| max + 1);
        windows.push(WindowRecord::new(id, frame));
    }

    fn set_window_frame(&self, window_id: WindowId, frame: Rect) {
        self.update(window_id, |window| {
            window.bounds = frame;
            window.state = WindowState::Normal;
        });
    }

    fn set_window_state(&self, window_id: WindowId, state: WindowState) {
        self.update(window_id, |window| window.state = state);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SNAPSHOT: &str = r#"{
        // Laptop on the left, external monitor on the right.
        "displays": [
            {
                "id": "laptop",
                "bounds": { "top": 0, "left": 0, "width": 1440, "height": 900 },
                "workArea": { "top": 25, "left": 0, "width": 1440, "height": 875 }
            },
            {
                "id": "external",
                "name": "DELL U2719D",
                "bounds": { "top": 0, "left": 1440, "width": 2560, "height": 1440 },
                "workArea": { "top": 0, "left": 1440, "width": 2560, "height": 1400 }
            }
        ],
        "windows": [
            { "id": 3, "bounds": { "top": 100, "left": 100, "width": 800, "height": 600 } },
            { "id": 7, "bounds": { "top": 50, "left": 1600, "width": 1200, "height": 900 }, "state": "minimized" }
        ],
        "focused": 7
    }"#;

    fn host() -> SnapshotHost { SnapshotHost::new(Snapshot::from_json(SNAPSHOT).unwrap()) }

    #[test]
    fn test_snapshot_parses_with_comments() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.displays.len(), 2);
        assert_eq!(snapshot.displays[1].label(), "DELL U2719D");
        assert_eq!(snapshot.windows[1].state, WindowState::Minimized);
        assert_eq!(snapshot.focused, Some(7));
    }

    #[test]
    fn test_snapshot_fields_default_when_missing() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_snapshot_rejects_invalid_json() {
        let err = Snapshot::from_json("{ \"displays\": 3 }").unwrap_err();
        assert!(matches!(err, LayoutError::Snapshot(_)));
    }

    #[test]
    fn test_snapshot_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let host = SnapshotHost::load(file.path()).unwrap();
        assert_eq!(host.windows_now().len(), 2);
    }

    #[test]
    fn test_snapshot_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn test_host_serves_snapshot() {
        let host = host();

        assert_eq!(host.displays().await.unwrap().len(), 2);
        assert_eq!(host.windows().await.unwrap().len(), 2);
        assert_eq!(host.current_window().await.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_host_without_focus_has_no_current_window() {
        let host = SnapshotHost::new(Snapshot {
            focused: None,
            ..Snapshot::from_json(SNAPSHOT).unwrap()
        });

        let err = host.current_window().await.unwrap_err();
        assert!(matches!(err, LayoutError::ProviderUnavailable(_)));
    }

    #[test]
    fn test_host_create_assigns_next_id() {
        let host = host();
        let frame = Rect::new(0, 0, 720, 875);

        host.create_window(frame);
        host.create_window(frame);

        let ids: Vec<WindowId> = host.windows_now().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 7, 8, 9]);
    }

    #[test]
    fn test_host_create_in_empty_table_starts_at_one() {
        let host = SnapshotHost::new(Snapshot::default());
        host.create_window(Rect::new(0, 0, 10, 10));
        assert_eq!(host.windows_now()[0].id, 1);
    }

    #[test]
    fn test_host_set_frame_restores_window() {
        let host = host();
        let frame = Rect::new(0, 1440, 1280, 1400);

        host.set_window_frame(7, frame);

        let window = host.windows_now()[1];
        assert_eq!(window.bounds, frame);
        assert_eq!(window.state, WindowState::Normal);
    }

    #[test]
    fn test_host_snapshot_reflects_mutations() {
        let host = host();
        host.set_window_state(3, WindowState::Minimized);
        host.create_window(Rect::new(0, 0, 720, 875));

        let snapshot = host.snapshot();
        assert_eq!(snapshot.displays.len(), 2);
        assert_eq!(snapshot.focused, Some(7));
        assert_eq!(snapshot.windows, host.windows_now());
        assert_eq!(snapshot.windows[0].state, WindowState::Minimized);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_host_minimize_and_unknown_window() {
        let host = host();

        host.set_window_state(3, WindowState::Minimized);
        host.set_window_state(99, WindowState::Minimized);
        host.set_window_frame(99, Rect::default());

        let windows = host.windows_now();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].state, WindowState::Minimized);
    }
}
