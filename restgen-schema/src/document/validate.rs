//! Validation context and reference resolution for decoded documents.

use std::sync::Arc;

use miette::SourceSpan;

use super::{DEFINITIONS_REF, Document, Schema};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the document hierarchy, so nested checks can report where in the
/// document a problem lives.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "api.swagger.json");
/// let nested = ctx.push("definitions").push("Account");
/// nested.check_reference(&document, "#/definitions/User")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["definitions", "Account"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Find the span of a quoted string in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_quoted_span(self.source.src(), value)
    }

    /// Check that a reference points at a declared definition.
    pub fn check_reference(&self, document: &Document, reference: &str) -> Result<()> {
        if !reference.starts_with(DEFINITIONS_REF) {
            return Err(self.source.invalid_reference_error(
                reference,
                self.path_string(),
                self.find_span(reference),
            ));
        }

        if document.resolve(reference).is_none() {
            return Err(self.source.unresolved_reference_error(
                reference,
                self.path_string(),
                self.find_span(reference),
            ));
        }

        Ok(())
    }

    /// Check every reference reachable from a schema.
    pub fn check_schema(&self, document: &Document, schema: &Schema) -> Result<()> {
        for reference in schema.references() {
            self.check_reference(document, reference)?;
        }
        Ok(())
    }
}

/// Find the span of `"value"` in the source, excluding the quotes.
fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Resolve every reference in the document.
///
/// Runs before any generation so an unresolved reference stops the run
/// without producing output.
pub(crate) fn validate_document(document: &Document, ctx: &ParseContext<'_>) -> Result<()> {
    let defs_ctx = ctx.push("definitions");
    for (def_name, definition) in &document.definitions {
        let def_ctx = defs_ctx.push(def_name).push("properties");
        for (prop_name, property) in &definition.properties {
            def_ctx.push(prop_name).check_schema(document, property)?;
        }
    }

    let paths_ctx = ctx.push("paths");
    for (path, method, operation) in document.operations() {
        let op_ctx = paths_ctx.push(path).push(method.as_str());

        for parameter in &operation.parameters {
            op_ctx
                .push("parameters")
                .push(&parameter.name)
                .check_schema(document, &parameter.descriptor())?;
        }

        if let Some(reference) = operation.response_reference() {
            op_ctx.push("responses").check_reference(document, reference)?;
        }
    }

    Ok(())
}
