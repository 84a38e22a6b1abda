//! Lint for distinct source names that generate the same identifier.

use indexmap::IndexMap;

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Argument names every generated builder may declare itself.
const AUTH_ARGUMENTS: &[&str] = &["bearer_token", "basic_auth_username", "basic_auth_password"];

/// Local variables every generated builder declares.
const BUILDER_LOCALS: &[&str] = &["urlpath", "query_params", "authentication"];

/// Type names the generated file declares, imports or uses unqualified.
const PRELUDE_TYPES: &[&str] = &[
    "Authentication",
    "Method",
    "RestRequest",
    "ToRestString",
    "DeJson",
    "String",
    "Vec",
    "HashMap",
    "Option",
];

/// Lint that errors when two names collapse into one identifier.
///
/// Checked scopes: model types, builder functions, fields within a model and
/// arguments within a builder. Model types may not reuse a prelude type
/// name. Arguments also may not shadow the
/// authentication arguments or builder locals.
pub struct NameCollisionLint;

/// Tracks generated names within one scope, remembering the first source name.
#[derive(Default)]
struct Scope<'a> {
    seen: IndexMap<String, &'a str>,
}

impl<'a> Scope<'a> {
    /// Record a name, returning the earlier source name on collision.
    fn insert(&mut self, generated: String, source: &'a str) -> Option<&'a str> {
        match self.seen.get(&generated) {
            Some(first) => Some(*first),
            None => {
                self.seen.insert(generated, source);
                None
            }
        }
    }
}

fn collision(
    what: &str,
    first: &str,
    second: &str,
    generated: &str,
    location: String,
) -> Diagnostic {
    Diagnostic::error(
        "validate",
        format!(
            "{} '{}' and '{}' both generate '{}'",
            what, first, second, generated
        ),
    )
    .at(location)
}

impl Lint for NameCollisionLint {
    fn name(&self) -> &'static str {
        "name-collision"
    }

    fn description(&self) -> &'static str {
        "Check that distinct names do not generate the same identifier"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut types = Scope::default();
        for (def_name, definition) in &ctx.document.definitions {
            let type_name = ctx.naming.type_name(def_name);
            if PRELUDE_TYPES.contains(&type_name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "definition '{}' clashes with the generated '{}'",
                            def_name, type_name
                        ),
                    )
                    .at(format!("definitions.{}", def_name)),
                );
            } else if let Some(first) = types.insert(type_name.clone(), def_name) {
                diagnostics.push(collision(
                    "definitions",
                    first,
                    def_name,
                    &type_name,
                    format!("definitions.{}", def_name),
                ));
            }

            let mut fields = Scope::default();
            for prop_name in definition.properties.keys() {
                let field_name = ctx.naming.field_name(prop_name);
                if let Some(first) = fields.insert(field_name.clone(), prop_name) {
                    diagnostics.push(collision(
                        "properties",
                        first,
                        prop_name,
                        &field_name,
                        format!("definitions.{}.properties.{}", def_name, prop_name),
                    ));
                }
            }
        }

        let mut fns = Scope::default();
        for (path, method, operation) in ctx.document.operations() {
            let location = operation_location(path, method.as_str());
            if operation.operation_id.is_empty() {
                continue;
            }

            let fn_name = ctx.fn_name(&operation.operation_id);
            if let Some(first) = fns.insert(fn_name.clone(), &operation.operation_id) {
                diagnostics.push(collision(
                    "operations",
                    first,
                    &operation.operation_id,
                    &fn_name,
                    location.clone(),
                ));
            }

            let mut args = Scope::default();
            for parameter in &operation.parameters {
                let arg_name = ctx.naming.field_name(&parameter.name);
                let param_location = format!("{}.parameters.{}", location, parameter.name);

                if AUTH_ARGUMENTS.contains(&arg_name.as_str())
                    || BUILDER_LOCALS.contains(&arg_name.as_str())
                {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "parameter '{}' of '{}' clashes with the generated '{}'",
                                parameter.name, operation.operation_id, arg_name
                            ),
                        )
                        .at(param_location),
                    );
                    continue;
                }

                if let Some(first) = args.insert(arg_name.clone(), &parameter.name) {
                    diagnostics.push(collision(
                        "parameters",
                        first,
                        &parameter.name,
                        &arg_name,
                        param_location,
                    ));
                }
            }
        }
    }
}
