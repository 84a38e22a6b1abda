//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from document validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API document.
    pub input: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Number of definitions in the document.
    pub definition_count: usize,
    /// Number of operations across all paths.
    pub operation_count: usize,
    /// Pretty-printed IR, when requested and lowering succeeded.
    pub ir: Option<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.input.display()));
        out.newline();
        out.preformatted(&format!(
            "  {} definition{}",
            self.definition_count,
            plural(self.definition_count)
        ));
        out.preformatted(&format!(
            "  {} operation{}",
            self.operation_count,
            plural(self.operation_count)
        ));

        if let Some(ir) = &self.ir {
            out.newline();
            out.preformatted(ir);
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report() -> CheckReport {
        CheckReport {
            input: PathBuf::from("api.swagger.json"),
            errors: Vec::new(),
            warnings: vec![
                "operation 'Healthcheck' has no summary\n  --> paths./v2/healthcheck.get".into(),
            ],
            infos: Vec::new(),
            definition_count: 1,
            operation_count: 3,
            ir: None,
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = BufferOutput::default();
        report().render(&mut out);

        insta::assert_snapshot!(out.text, @r"
        warning: operation 'Healthcheck' has no summary
          --> paths./v2/healthcheck.get

        ✓ api.swagger.json is valid

          1 definition
          3 operations
        ");
    }

    #[test]
    fn test_render_invalid_skips_summary() {
        let mut report = report();
        report.errors.push("operation 'X' uses unsupported security scheme 'OAuth2'".into());
        report.warnings.clear();

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text,
            "error: operation 'X' uses unsupported security scheme 'OAuth2'\n\n"
        );
    }
}
