//! Built-in lints for document validation.

mod body_parameter;
mod empty_summary;
mod identifier;
mod name_collision;
mod parameter_shape;
mod path_parameter;
mod security_scheme;

pub use body_parameter::BodyParameterLint;
pub use empty_summary::EmptySummaryLint;
pub use identifier::IdentifierLint;
pub use name_collision::NameCollisionLint;
pub use parameter_shape::ParameterShapeLint;
pub use path_parameter::PathParameterLint;
pub use security_scheme::SecuritySchemeLint;

#[cfg(test)]
pub(crate) fn run_lint(lint: &dyn super::Lint, json: &str) -> Vec<crate::pipeline::Diagnostic> {
    run_lint_with(lint, json, &crate::pipeline::GenerateOptions::default())
}

#[cfg(test)]
pub(crate) fn run_lint_with(
    lint: &dyn super::Lint,
    json: &str,
    options: &crate::pipeline::GenerateOptions,
) -> Vec<crate::pipeline::Diagnostic> {
    let document = crate::testing::document(json);
    let ctx = super::LintContext {
        document: &document,
        options,
        naming: &crate::testing::NAMING,
    };
    let mut diagnostics = Vec::new();
    lint.check(&ctx, &mut diagnostics);
    diagnostics
}
