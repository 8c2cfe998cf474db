//! Layout session.
//!
//! A [`Session`] is the context of one picker invocation. It reads the
//! displays once when it opens, remembers which display is selected, and
//! turns template selections into reconciliation plans against a fresh read
//! of the open windows.
//!
//! ```rust,ignore
//! let mut session = Session::open(&host).await;
//! session.preselect(&host).await;
//! let applied = session.apply(catalog.get("halves")?, &host, &host).await;
//! ```

use serde::Serialize;

use super::display::Display;
use super::error::{LayoutError, LayoutResult};
use super::executor::{ExecutionSummary, PlanExecutor};
use super::geometry::Rect;
use super::locator::locate;
use super::provider::{
    DisplayProvider, WindowMutator, WindowProvider, fetch_current_window, fetch_displays,
    fetch_windows,
};
use super::reconcile::{ReconciliationPlan, reconcile};
use super::template::{LayoutTemplate, ResolvedFrames};
use crate::constants::messages;

/// One entry of the display picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOption {
    /// Display id, `None` for the placeholder entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text shown to the user.
    pub label: String,
    /// Whether this entry is the selected display.
    pub selected: bool,
}

/// Result of applying a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedLayout {
    /// Actions handed to the window mutator, in order.
    pub plan: ReconciliationPlan,
    /// Counts of the executed actions.
    pub summary: ExecutionSummary,
}

/// Display snapshot and selection for one picker invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    displays: Vec<Display>,
    selected: usize,
}

impl Session {
    /// Opens a session over a display list, selecting the first display.
    #[must_use]
    pub const fn new(displays: Vec<Display>) -> Self { Self { displays, selected: 0 } }

    /// Opens a session by reading the displays from a provider.
    ///
    /// A provider failure leaves the session without displays.
    pub async fn open<P: DisplayProvider>(provider: &P) -> Self {
        let displays = fetch_displays(provider).await;
        tracing::debug!(count = displays.len(), "layout: session opened");
        Self::new(displays)
    }

    /// Selects the display holding the current window.
    ///
    /// Does nothing when the session has no displays or the current window
    /// cannot be read.
    pub async fn preselect<W: WindowProvider>(&mut self, windows: &W) {
        if self.displays.is_empty() {
            return;
        }

        if let Some(current) = fetch_current_window(windows).await {
            self.selected = locate(&self.displays, &current.bounds);
            tracing::debug!(
                window_id = current.id,
                display = %self.displays[self.selected].id,
                "layout: preselected display"
            );
        }
    }

    /// Selects a display by id.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::DisplayNotFound` if no display has that id.
    pub fn select_display(&mut self, id: &str) -> LayoutResult<&Display> {
        let index = self
            .displays
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| LayoutError::DisplayNotFound(id.to_string()))?;

        self.selected = index;
        Ok(&self.displays[index])
    }

    /// Returns the displays read when the session opened.
    #[must_use]
    pub fn displays(&self) -> &[Display] { &self.displays }

    /// Returns the selected display.
    #[must_use]
    pub fn selected(&self) -> Option<&Display> { self.displays.get(self.selected) }

    /// Returns the work area templates are resolved against.
    ///
    /// With a single display that display's work area is used regardless of
    /// the selection.
    #[must_use]
    pub fn work_area(&self) -> Option<Rect> {
        match self.displays.as_slice() {
            [] => None,
            [only] => Some(only.work_area),
            _ => self.selected().map(|d| d.work_area),
        }
    }

    /// Returns the entries of the display picker.
    ///
    /// Without displays a single placeholder entry is returned.
    #[must_use]
    pub fn options(&self) -> Vec<DisplayOption> {
        if self.displays.is_empty() {
            return vec![DisplayOption {
                id: None,
                label: messages::NO_DISPLAY.to_string(),
                selected: false,
            }];
        }

        self.displays
            .iter()
            .enumerate()
            .map(|(i, display)| DisplayOption {
                id: Some(display.id.clone()),
                label: display.label(),
                selected: i == self.selected,
            })
            .collect()
    }

    /// Resolves a template against the selected work area.
    ///
    /// Returns `None` when the session has no displays.
    #[must_use]
    pub fn resolve(&self, template: &LayoutTemplate) -> Option<ResolvedFrames> {
        self.work_area().map(|work_area| template.resolve(&work_area))
    }

    /// Builds the reconciliation plan for a template.
    ///
    /// Windows are read fresh on every call. When the current window cannot
    /// be read, the first window in provider order takes the first slot.
    /// Returns `None` when the session has no displays.
    pub async fn plan<W: WindowProvider>(
        &self,
        template: &LayoutTemplate,
        windows: &W,
    ) -> Option<ReconciliationPlan> {
        let Some(frames) = self.resolve(template) else {
            tracing::debug!(template = %template.name, "layout: no displays, nothing to arrange");
            return None;
        };

        let existing = fetch_windows(windows).await;
        let focused = match fetch_current_window(windows).await {
            Some(current) => current.id,
            None => existing.first().map_or(0, |w| w.id),
        };

        tracing::debug!(
            template = %template.name,
            windows = existing.len(),
            focused,
            "layout: planning template"
        );

        Some(reconcile(&existing, focused, &frames))
    }

    /// Plans a template and executes the plan through `mutator`.
    ///
    /// Returns `None` when the session has no displays.
    pub async fn apply<W: WindowProvider, M: WindowMutator>(
        &self,
        template: &LayoutTemplate,
        windows: &W,
        mutator: &M,
    ) -> Option<AppliedLayout> {
        let plan = self.plan(template, windows).await?;
        let summary = PlanExecutor::new(mutator).execute(&plan);
        Some(AppliedLayout { plan, summary })
    }
}
