//! Lint for operations declaring more than one body.

use restgen_schema::ParameterLocation;

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when an operation has more than one body parameter.
pub struct BodyParameterLint;

impl Lint for BodyParameterLint {
    fn name(&self) -> &'static str {
        "body-parameter"
    }

    fn description(&self) -> &'static str {
        "Check that each operation has at most one body parameter"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, operation) in ctx.document.operations() {
            let bodies: Vec<_> = operation
                .parameters_in(ParameterLocation::Body)
                .map(|p| p.name.as_str())
                .collect();

            if bodies.len() > 1 {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "operation '{}' declares {} body parameters ({}); at most one is allowed",
                            operation.operation_id,
                            bodies.len(),
                            bodies.join(", ")
                        ),
                    )
                    .at(operation_location(path, method.as_str())),
                );
            }
        }
    }
}
