//! Pipeline plugin that forwards diagnostics to `tracing`.

use eyre::Result;
use restgen_codegen::{CompilationContext, Severity, pipeline::Plugin};
use tracing::{error, info, warn};

/// Logs the diagnostics a phase produced once it completes.
///
/// Errors from the validate phase abort the run before this hook fires;
/// they reach the user through the returned error instead.
#[derive(Debug, Default)]
pub struct DiagnosticLog;

impl Plugin for DiagnosticLog {
    fn name(&self) -> &'static str {
        "diagnostic-log"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        for diag in ctx.diagnostics.iter().filter(|d| d.phase == phase) {
            let location = diag.location.as_deref().unwrap_or_default();
            match diag.severity {
                Severity::Error => error!(phase, location, "{}", diag.message),
                Severity::Warning => warn!(phase, location, "{}", diag.message),
                Severity::Info => info!(phase, location, "{}", diag.message),
            }
        }
        Ok(())
    }
}
