//! Window-to-slot reconciliation.
//!
//! Given the windows that are currently open and the frames of a resolved
//! template, [`reconcile`] decides what happens to every window:
//!
//! - the focused window always receives the first frame;
//! - the remaining windows receive the following frames in provider order;
//! - frames left over once every window is placed become new windows;
//! - windows left over once every frame is used are minimized.
//!
//! The plan is pure data. Nothing here talks to the window system; see
//! [`super::executor::PlanExecutor`] for that.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{LayoutError, LayoutResult};
use super::geometry::Rect;

/// Opaque window handle assigned by the window provider.
pub type WindowId = u32;

/// Visibility state of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    /// Window is shown at its frame.
    #[default]
    Normal,
    /// Window is minimized.
    Minimized,
}

/// A window as reported by the window provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Window handle.
    pub id: WindowId,
    /// Current frame in global coordinates.
    pub bounds: Rect,
    /// Current visibility state.
    #[serde(default)]
    pub state: WindowState,
}

impl WindowRecord {
    /// Creates a new window record in the normal state.
    #[must_use]
    pub const fn new(id: WindowId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            state: WindowState::Normal,
        }
    }
}

/// One step of a reconciliation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LayoutAction {
    /// Move and resize an existing window.
    Resize {
        /// Window to move.
        window_id: WindowId,
        /// Target frame.
        frame: Rect,
    },
    /// Open a new window at a frame.
    Create {
        /// Frame of the new window.
        frame: Rect,
    },
    /// Minimize a window that has no slot.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
}

impl LayoutAction {
    /// Returns the window this action targets, if it targets an existing one.
    #[must_use]
    pub const fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Resize { window_id, .. } | Self::Minimize { window_id } => Some(*window_id),
            Self::Create { .. } => None,
        }
    }

    /// Returns the frame this action places a window at, if any.
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        match self {
            Self::Resize { frame, .. } | Self::Create { frame } => Some(*frame),
            Self::Minimize { .. } => None,
        }
    }
}

/// Inline capacity for reconciliation plans.
///
/// Covers a four-slot template plus a handful of windows to minimize without
/// touching the heap.
pub const PLAN_INLINE_CAP: usize = 8;

/// Ordered actions produced by [`reconcile`].
pub type ReconciliationPlan = SmallVec<[LayoutAction; PLAN_INLINE_CAP]>;

/// Orders window ids so that the focused window comes first.
///
/// All other windows keep their relative order.
///
/// # Errors
///
/// Returns `LayoutError::InvalidFocusWindow` if `focused` is not among `windows`.
pub fn focus_first(windows: &[WindowRecord], focused: WindowId) -> LayoutResult<Vec<WindowId>> {
    let position = windows
        .iter()
        .position(|w| w.id == focused)
        .ok_or(LayoutError::InvalidFocusWindow(focused))?;

    let mut ordered = Vec::with_capacity(windows.len());
    ordered.push(focused);
    ordered.extend(
        windows
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != position)
            .map(|(_, w)| w.id),
    );
    Ok(ordered)
}

/// Matches open windows to target frames.
///
/// Frames are handed out by position after moving the focused window to the
/// front: the first `min(frames, windows)` windows are resized, extra frames
/// become [`LayoutAction::Create`], and extra windows become
/// [`LayoutAction::Minimize`]. Resizes and creates come first, in frame
/// order, followed by the minimizes in window order.
///
/// If `focused` is not among `windows` the windows are used in provider
/// order and a warning is logged.
#[must_use]
pub fn reconcile(windows: &[WindowRecord], focused: WindowId, frames: &[Rect]) -> ReconciliationPlan {
    let ordered = if windows.is_empty() {
        Vec::new()
    } else {
        focus_first(windows, focused).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "layout: keeping provider window order");
            windows.iter().map(|w| w.id).collect()
        })
    };

    let mut plan = ReconciliationPlan::with_capacity(frames.len().max(ordered.len()));

    for (i, frame) in frames.iter().enumerate() {
        let action = match ordered.get(i) {
            Some(&window_id) => LayoutAction::Resize {
                window_id,
                frame: *frame,
            },
            None => LayoutAction::Create { frame: *frame },
        };
        plan.push(action);
    }

    plan.extend(
        ordered
            .iter()
            .skip(frames.len())
            .map(|&window_id| LayoutAction::Minimize { window_id }),
    );

    tracing::debug!(
        windows = ordered.len(),
        frames = frames.len(),
        actions = plan.len(),
        "layout: reconciled windows with template"
    );

    plan
}
