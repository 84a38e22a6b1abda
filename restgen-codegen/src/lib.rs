//! Shared code generation utilities for the restgen binding generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `restgen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`pipeline`] - Validate and lower phases turning a document into IR
//! - [`resolve`] - Schema descriptor to value type resolution

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod resolve;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{LanguageCodegen, NamingConvention, TypeMapper};
pub use pipeline::{CompilationContext, Diagnostic, GenerateOptions, Pipeline, Severity};
pub use resolve::{ResolveError, TypeResolver};

#[cfg(test)]
mod testing;
