//! Lint for path parameters that may be left out.

use restgen_schema::ParameterLocation;

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about path parameters that are optional or have no
/// placeholder in the path template.
///
/// An absent optional path parameter leaves its `{name}` placeholder in
/// the generated URL path.
pub struct PathParameterLint;

impl Lint for PathParameterLint {
    fn name(&self) -> &'static str {
        "optional-path-parameter"
    }

    fn description(&self) -> &'static str {
        "Warn about optional or unplaced path parameters"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, operation) in ctx.document.operations() {
            let location = operation_location(path, method.as_str());

            for parameter in operation.parameters_in(ParameterLocation::Path) {
                if !parameter.required {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "path parameter '{}' of '{}' is optional; its placeholder stays in the path when absent",
                                parameter.name, operation.operation_id
                            ),
                        )
                        .at(format!("{}.parameters.{}", location, parameter.name)),
                    );
                }

                let placeholder = format!("{{{}}}", parameter.name);
                if !path.contains(&placeholder) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "path parameter '{}' has no placeholder in '{}'",
                                parameter.name, path
                            ),
                        )
                        .at(format!("{}.parameters.{}", location, parameter.name)),
                    );
                }
            }
        }
    }
}
