//! Tilepad - grid window layouts across displays.
//!
//! The [`layout`] module holds the engine: slot resolution, display location,
//! window reconciliation and the session that ties them to the display and
//! window providers. The [`cli`] module drives the engine against a snapshot
//! environment.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod logging;
