//! Collaborator interfaces around the layout engine.
//!
//! The engine never reads displays or windows on its own, and never moves a
//! window itself. A host environment implements these traits:
//!
//! - [`DisplayProvider`]: enumerates displays (async)
//! - [`WindowProvider`]: enumerates windows and reports the focused one (async)
//! - [`WindowMutator`]: creates, moves and minimizes windows (fire-and-forget)
//!
//! [`super::snapshot::SnapshotHost`] implements all three over an in-memory
//! snapshot.

use super::display::{self, Display};
use super::error::LayoutResult;
use super::geometry::Rect;
use super::reconcile::{WindowId, WindowRecord, WindowState};

/// Source of display geometry.
pub trait DisplayProvider {
    /// Returns every connected display.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ProviderUnavailable` if the environment cannot
    /// report displays.
    fn displays(&self) -> impl Future<Output = LayoutResult<Vec<Display>>>;
}

/// Source of open windows.
pub trait WindowProvider {
    /// Returns every open window in provider order.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ProviderUnavailable` if the environment cannot
    /// report windows.
    fn windows(&self) -> impl Future<Output = LayoutResult<Vec<WindowRecord>>>;

    /// Returns the window the user is currently interacting with.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ProviderUnavailable` if there is no current window.
    fn current_window(&self) -> impl Future<Output = LayoutResult<WindowRecord>>;
}

/// Sink for window changes.
///
/// Calls are fire-and-forget: the engine does not wait for a change to land
/// before issuing the next one.
pub trait WindowMutator {
    /// Opens a new window at `frame`.
    fn create_window(&self, frame: Rect);

    /// Moves and resizes a window.
    fn set_window_frame(&self, window_id: WindowId, frame: Rect);

    /// Changes the visibility state of a window.
    fn set_window_state(&self, window_id: WindowId, state: WindowState);
}

/// Fetches displays, degrading provider failures to an empty list.
pub async fn fetch_displays<P: DisplayProvider>(provider: &P) -> Vec<Display> {
    match provider.displays().await {
        Ok(displays) => {
            display::warn_inconsistent(&displays);
            displays
        }
        Err(err) => {
            tracing::warn!(error = %err, "layout: failed to read displays");
            Vec::new()
        }
    }
}

/// Fetches windows, degrading provider failures to an empty list.
pub async fn fetch_windows<P: WindowProvider>(provider: &P) -> Vec<WindowRecord> {
    provider.windows().await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "layout: failed to read windows");
        Vec::new()
    })
}

/// Fetches the current window, logging provider failures.
pub async fn fetch_current_window<P: WindowProvider>(provider: &P) -> Option<WindowRecord> {
    provider
        .current_window()
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "layout: failed to read current window"))
        .ok()
}
