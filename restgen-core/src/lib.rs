//! Core utilities for the restgen binding generator.
//!
//! This crate provides the identifier normalization rules and the atomic
//! file writer used across the restgen workspace.

mod file;
mod utils;

// File operations
pub use file::File;
// Identifier normalization
pub use utils::{strip_newlines, to_camel_case, to_pascal_case, to_snake_case, to_title_case};
