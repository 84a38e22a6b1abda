//! Pipeline orchestrator.

use eyre::Result;
use restgen_schema::Document;
use tracing::debug;

use super::{
    CompilationContext, GenerateOptions, Phase, Plugin,
    phases::{LowerPhase, ValidatePhase},
};
use crate::NamingConvention;

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs the built-in phases (validate, lower) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(RUST_NAMING)
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(document, options)?;
/// ```
pub struct Pipeline {
    naming: NamingConvention,
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase (e.g., to customize lints).
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a document.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on any error diagnostic
    /// 2. LowerPhase - resolves the document into IR
    /// 3. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, document: Document, options: GenerateOptions) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, options, self.naming);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&LowerPhase, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run every phase without generating, collecting all findings.
    ///
    /// Lint errors do not stop the lints that follow them. A phase failure
    /// after validation is recorded as an error diagnostic and ends the run.
    pub fn check(&self, document: Document, options: GenerateOptions) -> CompilationContext {
        let mut ctx = CompilationContext::new(document, options, self.naming);

        self.validate.collect(&mut ctx);
        if ctx.has_errors() {
            return ctx;
        }

        let later = std::iter::once(&LowerPhase as &dyn Phase)
            .chain(self.phases.iter().map(|p| p.as_ref()));
        for phase in later {
            if let Err(err) = self.run_phase(phase, &mut ctx) {
                ctx.add_error(phase.name(), format!("{:#}", err));
                break;
            }
        }

        ctx
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, description = phase.description(), "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::testing::{NAMING, document};

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    const ACCOUNT_DOC: &str = r##"{
        "definitions": {
            "apiAccount": {"properties": {"wallet": {"type": "string"}}}
        },
        "paths": {
            "/v2/account": {"get": {
                "summary": "Fetch the current user's account.",
                "operationId": "GetAccount",
                "responses": {"200": {"schema": {"$ref": "#/definitions/apiAccount"}}}
            }}
        }
    }"##;

    #[test]
    fn test_pipeline_runs_phases() {
        let pipeline = Pipeline::new(NAMING);
        let ctx = pipeline
            .run(document(ACCOUNT_DOC), GenerateOptions::default())
            .expect("pipeline should succeed");

        let ir = ctx.ir.as_ref().expect("IR should be populated");
        assert_eq!(ir.models.len(), 1);
        assert_eq!(ir.endpoints.len(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new(NAMING).plugin(plugin);
        pipeline
            .run(document(ACCOUNT_DOC), GenerateOptions::default())
            .expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 2);
        assert_eq!(after_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_pipeline_fails_on_lint_error() {
        let doc = document(
            r#"{"paths": {"/v2/x": {"get": {"operationId": "X",
                "security": [{"OAuth2": []}]}}}}"#,
        );
        let err = Pipeline::new(NAMING)
            .run(doc, GenerateOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_check_collects_lowering_failure() {
        let doc = document(
            r#"{"definitions": {"apiUser": {"properties": {
                "metadata": {"type": "object"}
            }}}}"#,
        );
        let ctx = Pipeline::new(NAMING).check(doc, GenerateOptions::default());

        assert!(ctx.ir.is_none());
        let errors: Vec<_> = ctx.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].phase, "lower");
        assert!(errors[0].message.contains("metadata"));
    }

    #[test]
    fn test_check_reports_every_lint() {
        let doc = document(
            r#"{"paths": {
                "/v2/a": {"get": {"operationId": "A", "security": [{"OAuth2": []}]}},
                "/v2/b": {"get": {"operationId": "B", "security": [{"ApiKey": []}]}}
            }}"#,
        );
        let ctx = Pipeline::new(NAMING).check(doc, GenerateOptions::default());
        assert_eq!(ctx.error_count(), 2);
    }
}
