//! Validate phase - runs lints on the document.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintContext};
pub use lints::{
    BodyParameterLint, EmptySummaryLint, IdentifierLint, NameCollisionLint, ParameterShapeLint,
    PathParameterLint, SecuritySchemeLint,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the document using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(IdentifierLint),
                Box::new(NameCollisionLint),
                Box::new(BodyParameterLint),
                Box::new(ParameterShapeLint),
                Box::new(SecuritySchemeLint),
                Box::new(PathParameterLint),
                Box::new(EmptySummaryLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint, recording diagnostics without failing.
    pub fn collect(&self, ctx: &mut CompilationContext) {
        let lint_ctx = LintContext {
            document: &ctx.document,
            options: &ctx.options,
            naming: &ctx.naming,
        };
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&lint_ctx, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                findings = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check document integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.collect(ctx);

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            let listing = ctx
                .errors()
                .map(|d| format!("  {}", d))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "validation failed with {} error(s):\n{}",
                ctx.error_count(),
                listing
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::{Diagnostic, GenerateOptions},
        testing::{NAMING, document},
    };

    fn make_context(json: &str) -> CompilationContext {
        CompilationContext::new(document(json), GenerateOptions::default(), NAMING)
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = make_context("{}");
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let err = phase.run(&mut ctx).unwrap_err();

        assert!(ctx.has_errors());
        assert!(err.to_string().contains("forced error"));
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = make_context(r#"{"paths": {"/v2/x": {"get": {"operationId": "X"}}}}"#);

        let phase = ValidatePhase::empty().with_lint(EmptySummaryLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        let names = ValidatePhase::new().lint_names();
        assert_eq!(
            names,
            [
                "identifier",
                "name-collision",
                "body-parameter",
                "parameter-shape",
                "security-scheme",
                "optional-path-parameter",
                "empty-summary",
            ]
        );
    }
}
