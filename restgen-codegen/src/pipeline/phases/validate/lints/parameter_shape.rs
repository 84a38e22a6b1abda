//! Lint for parameter types that cannot be carried by their location.

use restgen_schema::ParameterLocation;

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Lint that errors on collections where the request cannot carry them.
///
/// Path placeholders take a single value, so arrays and maps are rejected
/// there. Query strings repeat a key per array element but have no form for
/// maps or model elements.
pub struct ParameterShapeLint;

impl Lint for ParameterShapeLint {
    fn name(&self) -> &'static str {
        "parameter-shape"
    }

    fn description(&self) -> &'static str {
        "Check that path and query parameters have a representable type"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, operation) in ctx.document.operations() {
            for parameter in &operation.parameters {
                let kind = parameter.kind.as_deref().unwrap_or_default();
                let model_items = parameter
                    .items
                    .as_ref()
                    .is_some_and(|items| items.reference.is_some());
                let rejected = match parameter.location {
                    ParameterLocation::Path => matches!(kind, "array" | "object"),
                    ParameterLocation::Query => kind == "object" || model_items,
                    ParameterLocation::Body => false,
                };

                if rejected {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "{} parameter '{}' of '{}' cannot have type '{}'",
                                parameter.location.as_str(),
                                parameter.name,
                                operation.operation_id,
                                kind
                            ),
                        )
                        .at(format!(
                            "{}.parameters.{}",
                            operation_location(path, method.as_str()),
                            parameter.name
                        )),
                    );
                }
            }
        }
    }
}
