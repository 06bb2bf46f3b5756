//! # lvsm common
//!
//! Configuration and validation layer shared by every `lvsm` component.
//!
//! * **[`config`]**: the fixed configuration schema and its parser.
//! * **[`file`]**: line-oriented file reading.
//! * **[`validate`]**: pure string validators used when checking individual fields.
//! * **[`error`]**: error types surfaced by the modules above.

pub mod config;
pub mod error;
pub mod file;
pub mod validate;

/// Name of the tracing target every `lvsm` diagnostic is emitted under.
pub const LOG_TARGET: &str = "lvsm";
