//! Lint trait for document validation.

use restgen_schema::Document;

use crate::{
    NamingConvention,
    pipeline::{Diagnostic, GenerateOptions},
};

/// Everything a lint may read.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub document: &'a Document,
    pub options: &'a GenerateOptions,
    pub naming: &'a NamingConvention,
}

impl LintContext<'_> {
    /// Generated function name of an operation.
    pub fn fn_name(&self, operation_id: &str) -> String {
        self.naming
            .fn_name(&self.options.strip_operation_prefix(operation_id))
    }
}

/// A lint that checks the document for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);
}

/// Location string of an operation.
pub(crate) fn operation_location(path: &str, method: &str) -> String {
    format!("paths.{}.{}", path, method)
}
