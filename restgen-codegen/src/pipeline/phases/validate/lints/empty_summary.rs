//! Lint for operations without a summary.

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about operations missing a summary.
///
/// The summary becomes the doc comment of the generated builder.
pub struct EmptySummaryLint;

impl Lint for EmptySummaryLint {
    fn name(&self) -> &'static str {
        "empty-summary"
    }

    fn description(&self) -> &'static str {
        "Warn about operations without a summary"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, operation) in ctx.document.operations() {
            if operation.summary.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("operation '{}' has no summary", operation.operation_id),
                    )
                    .at(operation_location(path, method.as_str())),
                );
            }
        }
    }
}
