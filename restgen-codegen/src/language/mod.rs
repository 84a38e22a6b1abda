//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Trait for mapping value types to language types
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::{NamingConvention, is_identifier};
pub use traits::{LanguageCodegen, TypeMapper};
