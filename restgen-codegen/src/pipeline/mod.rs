//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that turns a decoded
//! document into the IR consumed by language generators:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use restgen_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(RUST_NAMING);
//! let ctx = pipeline.run(document, GenerateOptions::default())?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, DEFAULT_BANNER, GenerateOptions};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
