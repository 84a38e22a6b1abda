//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use restgen_ir::ApiIR;
use restgen_schema::Document;

use super::diagnostic::{Diagnostic, Severity};
use crate::NamingConvention;

/// Banner written on the first line when none is configured.
pub const DEFAULT_BANNER: &str = "/* Code generated by restgen. DO NOT EDIT. */";

/// Options that shape generation without being part of the document.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Removed once from every operation id before naming.
    pub operation_prefix: Option<String>,
    /// Opaque sub-namespace tag, passed through to the IR.
    pub namespace: Option<String>,
    /// First line of the artifact.
    pub banner: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            operation_prefix: None,
            namespace: None,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Remove the first occurrence of the configured prefix from an operation id.
    pub fn strip_operation_prefix(&self, operation_id: &str) -> String {
        match self.operation_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => operation_id.replacen(prefix, "", 1),
            _ => operation_id.to_string(),
        }
    }
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The document being compiled. Read-only for every phase.
    pub document: Document,
    /// Generation options.
    pub options: GenerateOptions,
    /// Naming rules of the target language.
    pub naming: NamingConvention,
    /// The lowered API IR (populated by LowerPhase).
    pub ir: Option<ApiIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context.
    pub fn new(document: Document, options: GenerateOptions, naming: NamingConvention) -> Self {
        Self {
            document,
            options,
            naming,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Result<ApiIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }
}
