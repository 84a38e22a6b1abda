//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of generated data structures.
    pub model_count: usize,
    /// Number of generated request builders.
    pub endpoint_count: usize,
    /// Warnings raised by the pipeline. They are logged as they occur.
    pub warning_count: usize,
    /// Where the artifact went.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The artifact was written to this path.
    Written(PathBuf),
    /// The artifact, to be printed.
    Printed(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Printed(code) => out.code(code),
            GenerationResult::Written(path) => {
                out.key_value("Generated", &path.display().to_string());
                out.key_value("Models", &self.model_count.to_string());
                out.key_value("Endpoints", &self.endpoint_count.to_string());
                if self.warning_count > 0 {
                    out.key_value("Warnings", &self.warning_count.to_string());
                }
            }
        }
    }
}
