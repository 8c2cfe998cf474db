//! Error types for the layout engine.
//!
//! The pure layout steps (slot resolution, display location, reconciliation)
//! never fail. Errors only come from the collaborators around them and from
//! template validation.
//!
//! # Error Categories
//!
//! - **Provider errors**: the display or window provider returned nothing usable
//! - **Precondition errors**: the focused window is not among the open windows
//! - **Template errors**: a template is malformed or unknown
//! - **Lookup errors**: a display id does not match the snapshot
//! - **Snapshot errors**: a snapshot environment file could not be read
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::layout::error::{LayoutError, LayoutResult};
//!
//! fn pick(session: &mut Session, id: &str) -> LayoutResult<()> {
//!     session.select_display(id)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use super::reconcile::WindowId;

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while arranging windows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The display or window provider could not deliver a snapshot.
    ///
    /// Callers log this and continue with an empty collection.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The focused window id is not among the open windows.
    #[error("Focused window {0} is not among the open windows")]
    InvalidFocusWindow(WindowId),

    /// A template failed validation.
    ///
    /// Raised while loading the template catalog, never while applying
    /// an already validated template.
    #[error("Template '{template}' is malformed: {reason}")]
    MalformedTemplate {
        /// Name of the offending template.
        template: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No template with the given name exists in the catalog.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// No display with the given id exists in the session snapshot.
    #[error("Display '{0}' not found")]
    DisplayNotFound(String),

    /// A snapshot environment file could not be loaded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl LayoutError {
    /// Creates a provider error with the given message.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }

    /// Creates a malformed template error.
    #[must_use]
    pub fn malformed(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Creates a snapshot error with the given message.
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self { Self::Snapshot(message.into()) }

    /// Returns `true` if this error indicates a lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound(_) | Self::DisplayNotFound(_))
    }

    /// Returns `true` if the caller violated a documented precondition.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::InvalidFocusWindow(_) | Self::MalformedTemplate { .. })
    }
}
