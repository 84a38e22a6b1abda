//! Lint for names that do not form valid identifiers.

use super::super::{Lint, LintContext, lint::operation_location};
use crate::{language::is_identifier, pipeline::Diagnostic};

/// Lint that errors when a generated name is not a valid identifier.
///
/// Names are checked after the naming convention is applied, so a
/// definition called `api.Account` or a property starting with a digit is
/// caught here instead of in the generated source.
pub struct IdentifierLint;

impl IdentifierLint {
    fn report(
        diagnostics: &mut Vec<Diagnostic>,
        what: &str,
        source: &str,
        generated: &str,
        location: String,
    ) {
        diagnostics.push(
            Diagnostic::error(
                "validate",
                format!(
                    "{} '{}' becomes '{}', which is not a valid identifier",
                    what, source, generated
                ),
            )
            .at(location),
        );
    }
}

impl Lint for IdentifierLint {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn description(&self) -> &'static str {
        "Check that definitions, properties, operations and parameters produce valid identifiers"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (def_name, definition) in &ctx.document.definitions {
            let type_name = ctx.naming.type_name(def_name);
            if !is_identifier(&type_name) {
                Self::report(
                    diagnostics,
                    "definition",
                    def_name,
                    &type_name,
                    format!("definitions.{}", def_name),
                );
            }

            for prop_name in definition.properties.keys() {
                let field_name = ctx.naming.field_name(prop_name);
                if !is_identifier(&field_name) {
                    Self::report(
                        diagnostics,
                        "property",
                        prop_name,
                        &field_name,
                        format!("definitions.{}.properties.{}", def_name, prop_name),
                    );
                }
            }
        }

        for (path, method, operation) in ctx.document.operations() {
            let location = operation_location(path, method.as_str());

            if operation.operation_id.is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", "operation has no operationId").at(location),
                );
                continue;
            }

            let fn_name = ctx.fn_name(&operation.operation_id);
            if !is_identifier(&fn_name) {
                Self::report(
                    diagnostics,
                    "operation",
                    &operation.operation_id,
                    &fn_name,
                    location.clone(),
                );
            }

            for parameter in &operation.parameters {
                let arg_name = ctx.naming.field_name(&parameter.name);
                if !is_identifier(&arg_name) {
                    Self::report(
                        diagnostics,
                        "parameter",
                        &parameter.name,
                        &arg_name,
                        format!("{}.parameters.{}", location, parameter.name),
                    );
                }
            }
        }
    }
}
