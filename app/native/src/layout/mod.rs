//! Grid layout engine.
//!
//! Arranges windows into template slots on one display at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │            DisplayProvider / WindowProvider                │
//! │     (SnapshotHost, or any windowing system adapter)       │
//! └─────────────────────────┬─────────────────────────────────┘
//!                           │ displays once, windows per click
//!                           ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Session                             │
//! │  - locate(): preselect the display of the current window  │
//! │  - resolve(): template slots → frames in the work area    │
//! │  - reconcile(): frames × windows → ReconciliationPlan     │
//! └─────────────────────────┬─────────────────────────────────┘
//!                           │ ReconciliationPlan
//!                           ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                      PlanExecutor                          │
//! │  Resize / Create / Minimize → WindowMutator               │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Slot resolution, display location and reconciliation are pure functions
//! over data read beforehand; only the session talks to the providers.

pub mod display;
pub mod error;
pub mod executor;
pub mod geometry;
pub mod locator;
pub mod provider;
pub mod reconcile;
pub mod session;
pub mod slot;
pub mod snapshot;
pub mod template;

pub use display::Display;
pub use error::{LayoutError, LayoutResult};
pub use executor::{ExecutionSummary, PlanExecutor};
pub use geometry::{Point, Rect};
pub use locator::locate;
pub use provider::{DisplayProvider, WindowMutator, WindowProvider};
pub use reconcile::{
    LayoutAction, PLAN_INLINE_CAP, ReconciliationPlan, WindowId, WindowRecord, WindowState,
    focus_first, reconcile,
};
pub use session::{AppliedLayout, DisplayOption, Session};
pub use slot::{ColKey, HeightClass, RowKey, Slot, SlotSpec, WidthClass, resolve};
pub use snapshot::{Snapshot, SnapshotHost};
pub use template::{
    LayoutTemplate, ResolvedFrames, SLOT_INLINE_CAP, TemplateCatalog, TemplateSpec,
    builtin_templates,
};
