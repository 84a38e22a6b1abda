//! Lint for unknown security schemes.

use super::super::{Lint, LintContext, lint::operation_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when an operation names a security scheme other than
/// `BasicAuth`, `HttpKeyAuth` or `BearerToken`.
///
/// Only the first security requirement is considered.
pub struct SecuritySchemeLint;

impl Lint for SecuritySchemeLint {
    fn name(&self) -> &'static str {
        "security-scheme"
    }

    fn description(&self) -> &'static str {
        "Check that operations use a supported authentication scheme"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (path, method, operation) in ctx.document.operations() {
            if let Err(key) = operation.security_scheme() {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "operation '{}' uses unsupported security scheme '{}'",
                            operation.operation_id, key
                        ),
                    )
                    .at(format!("{}.security", operation_location(path, method.as_str()))),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::run_lint;

    #[test]
    fn test_known_schemes() {
        let diagnostics = run_lint(
            &SecuritySchemeLint,
            r#"{"paths": {"/v2/x": {
                "get": {"operationId": "A", "security": [{"BasicAuth": []}]},
                "put": {"operationId": "B", "security": [{"HttpKeyAuth": []}]},
                "post": {"operationId": "C"}
            }}}"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_only_first_requirement_counts() {
        let diagnostics = run_lint(
            &SecuritySchemeLint,
            r#"{"paths": {"/v2/x": {
                "get": {"operationId": "A", "security": [{"BasicAuth": []}, {"OAuth2": []}]}
            }}}"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_scheme() {
        let diagnostics = run_lint(
            &SecuritySchemeLint,
            r#"{"paths": {"/v2/x": {"get": {"operationId": "A", "security": [{"OAuth2": []}]}}}}"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'OAuth2'"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("paths./v2/x.get.security")
        );
    }
}
