//! Core operations.
//!
//! This module contains the business logic for restgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
mod options;
mod plugin;

pub use check::check;
pub use generate::{GenerateTarget, generate};
pub use options::{Overrides, generate_options};
pub use plugin::DiagnosticLog;
