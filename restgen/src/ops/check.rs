//! Check operation - document validation.

use std::path::Path;

use eyre::{Context, Result};
use restgen_codegen::{GenerateOptions, Pipeline, Severity};
use restgen_codegen_rust::RUST_NAMING;
use restgen_schema::Document;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Every lint runs even after an earlier one fails, and lowering runs when
/// validation passed. Nothing is generated.
pub fn check(
    document: Document,
    options: GenerateOptions,
    input: &Path,
    include_ir: bool,
) -> Result<CheckReport> {
    let definition_count = document.definitions.len();
    let operation_count = document.operation_count();

    let ctx = Pipeline::new(RUST_NAMING).check(document, options);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let ir = match (&ctx.ir, include_ir) {
        (Some(ir), true) => {
            Some(serde_json::to_string_pretty(ir).wrap_err("Failed to serialize IR")?)
        }
        _ => None,
    };

    Ok(CheckReport {
        input: input.to_path_buf(),
        errors,
        warnings,
        infos,
        definition_count,
        operation_count,
        ir,
    })
}
