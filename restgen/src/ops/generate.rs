//! Generate operation - bindings from an API document.

use std::path::Path;

use eyre::{Context, Result};
use restgen_codegen::{GenerateOptions, LanguageCodegen, Pipeline};
use restgen_codegen_rust::{Generator, RUST_NAMING};
use restgen_core::File;
use restgen_schema::Document;
use tracing::info;

use super::DiagnosticLog;
use crate::reports::{GenerateReport, GenerationResult};

/// Where the rendered artifact goes.
#[derive(Debug, Clone, Copy)]
pub enum GenerateTarget<'a> {
    /// Print to stdout.
    Stdout,
    /// Write atomically to a file.
    File(&'a Path),
}

/// Execute the generate operation.
///
/// The artifact is rendered in full before anything is written, so a failed
/// run never leaves a partial file behind.
pub fn generate(
    document: Document,
    options: GenerateOptions,
    target: GenerateTarget<'_>,
) -> Result<GenerateReport> {
    let pipeline = Pipeline::new(RUST_NAMING).plugin(DiagnosticLog);
    let mut ctx = pipeline.run(document, options).wrap_err("Pipeline failed")?;
    let warning_count = ctx.warning_count();

    let generator = Generator::from_context(&mut ctx)?;
    let code = generator.render().wrap_err("Failed to generate code")?;
    let model_count = generator.ir().models.len();
    let endpoint_count = generator.ir().endpoints.len();

    let result = match target {
        GenerateTarget::Stdout => GenerationResult::Printed(code),
        GenerateTarget::File(path) => {
            File::new(path, code).write()?;
            info!(path = %path.display(), "wrote bindings");
            GenerationResult::Written(path.to_path_buf())
        }
    };

    Ok(GenerateReport {
        model_count,
        endpoint_count,
        warning_count,
        result,
    })
}
