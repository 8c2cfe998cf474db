//! Plan executor for handing reconciliation plans to the window system.
//!
//! The executor walks a plan in order and forwards each action to a
//! [`WindowMutator`]. Calls are fire-and-forget: the executor neither waits
//! for a change to land nor checks that it did.

use serde::Serialize;

use super::provider::WindowMutator;
use super::reconcile::{LayoutAction, WindowState};

// ============================================================================
// Execution Summary
// ============================================================================

/// Counts of the actions handed to the mutator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionSummary {
    /// Existing windows moved into a slot.
    pub resized: usize,
    /// New windows opened for slots without a window.
    pub created: usize,
    /// Windows minimized because no slot was left for them.
    pub minimized: usize,
}

impl ExecutionSummary {
    /// Returns the total number of actions executed.
    #[must_use]
    pub const fn total(&self) -> usize { self.resized + self.created + self.minimized }
}

// ============================================================================
// Plan Executor
// ============================================================================

/// Applies reconciliation plans through a window mutator.
pub struct PlanExecutor<'a, M: WindowMutator> {
    mutator: &'a M,
}

impl<'a, M: WindowMutator> PlanExecutor<'a, M> {
    /// Creates an executor that forwards actions to `mutator`.
    #[must_use]
    pub const fn new(mutator: &'a M) -> Self { Self { mutator } }

    /// Executes every action of a plan, in plan order.
    pub fn execute(&self, plan: &[LayoutAction]) -> ExecutionSummary {
        let mut summary = ExecutionSummary::default();

        for action in plan {
            match *action {
                LayoutAction::Resize { window_id, frame } => {
                    tracing::debug!(window_id, %frame, "layout: resizing window");
                    self.mutator.set_window_frame(window_id, frame);
                    summary.resized += 1;
                }
                LayoutAction::Create { frame } => {
                    tracing::debug!(%frame, "layout: creating window");
                    self.mutator.create_window(frame);
                    summary.created += 1;
                }
                LayoutAction::Minimize { window_id } => {
                    tracing::debug!(window_id, "layout: minimizing window");
                    self.mutator.set_window_state(window_id, WindowState::Minimized);
                    summary.minimized += 1;
                }
            }
        }

        tracing::info!(
            resized = summary.resized,
            created = summary.created,
            minimized = summary.minimized,
            "layout: plan executed"
        );

        summary
    }
}
