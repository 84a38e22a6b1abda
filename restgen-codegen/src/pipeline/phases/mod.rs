//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints on the document and collects diagnostics
//! - [`LowerPhase`] - transforms the document into API IR

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    BodyParameterLint, EmptySummaryLint, IdentifierLint, Lint, LintContext, NameCollisionLint,
    ParameterShapeLint, PathParameterLint, SecuritySchemeLint, ValidatePhase,
};
