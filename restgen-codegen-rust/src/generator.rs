use eyre::{Result, bail};
use restgen_codegen::{CompilationContext, LanguageCodegen, Renderable};
use restgen_ir::{ApiIR, ValueType};
use tracing::debug;

use crate::{
    RustFile, Use,
    sections::{EndpointFn, ModelItems, Prelude},
};

/// Rust code generator that produces request builders for `nanoserde`
/// based clients.
///
/// The artifact is, in order: the banner, imports, the runtime prelude, one
/// struct and serializer per model, then one builder per endpoint.
pub struct Generator {
    ir: ApiIR,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self) -> Result<String> {
        self.check_references()?;

        let file = self.build_file();
        debug!(
            models = self.ir.models.len(),
            endpoints = self.ir.endpoints.len(),
            "rendered bindings"
        );
        Ok(file.render())
    }
}

impl Generator {
    pub fn new(ir: ApiIR) -> Self {
        Self { ir }
    }

    /// Take the lowered IR out of a finished pipeline run.
    pub fn from_context(ctx: &mut CompilationContext) -> Result<Self> {
        ctx.take_ir().map(Self::new)
    }

    pub fn ir(&self) -> &ApiIR {
        &self.ir
    }

    /// Every model named by a field, argument or response must be emitted.
    fn check_references(&self) -> Result<()> {
        let field_types = self
            .ir
            .models
            .iter()
            .flat_map(|m| m.fields.iter().map(move |f| (m.name.as_str(), &f.ty)));
        let param_types = self
            .ir
            .endpoints
            .iter()
            .flat_map(|e| e.params.iter().map(move |p| (e.fn_name.as_str(), &p.ty)));

        for (owner, ty) in field_types.chain(param_types) {
            if let Some(name) = model_name(ty)
                && self.ir.model(name).is_none()
            {
                bail!("'{}' refers to unknown model '{}'", owner, name);
            }
        }

        for endpoint in &self.ir.endpoints {
            if let Some(name) = endpoint.response.as_deref()
                && self.ir.model(name).is_none()
            {
                bail!(
                    "'{}' responds with unknown model '{}'",
                    endpoint.fn_name,
                    name
                );
            }
        }

        Ok(())
    }

    fn build_file(&self) -> RustFile {
        let prelude = Prelude::new(self.ir.uses_map());

        let mut file = prelude
            .uses()
            .into_iter()
            .fold(RustFile::new().header(&self.ir.meta.banner), RustFile::use_stmt);
        if !self.ir.models.is_empty() {
            file = file.use_stmt(Use::new("nanoserde").symbol("DeJson"));
        }

        let models = self
            .ir
            .models
            .iter()
            .flat_map(|model| ModelItems::new(model).items());
        let endpoints = self
            .ir
            .endpoints
            .iter()
            .map(|endpoint| Box::new(EndpointFn::new(endpoint).build()) as Box<dyn Renderable>);

        file.add_all(prelude.items())
            .add_all(models)
            .add_all(endpoints)
    }
}

fn model_name(ty: &ValueType) -> Option<&str> {
    match ty {
        ValueType::Model(name) => Some(name),
        ValueType::Array(inner) | ValueType::Map(inner) => model_name(inner),
        ValueType::Primitive(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use restgen_ir::{ApiMeta, AuthScheme, Endpoint, HttpMethod};

    use super::*;

    fn ir(response: Option<&str>) -> ApiIR {
        ApiIR {
            meta: ApiMeta {
                namespace: None,
                banner: "/* generated */".into(),
            },
            models: vec![],
            endpoints: vec![Endpoint {
                fn_name: "healthcheck".into(),
                operation_id: "Healthcheck".into(),
                summary: None,
                path: "/healthcheck".into(),
                method: HttpMethod::Get,
                auth: AuthScheme::Bearer,
                params: vec![],
                response: response.map(Into::into),
            }],
        }
    }

    #[test]
    fn test_render_without_models() {
        let code = Generator::new(ir(None)).render().unwrap();
        assert!(code.starts_with("/* generated */\n\n/// Credentials attached to a request.\n"));
        assert!(!code.contains("nanoserde"));
        assert!(code.ends_with("        _marker: std::marker::PhantomData,\n    }\n}\n"));
    }

    #[test]
    fn test_unknown_response_model() {
        let err = Generator::new(ir(Some("ApiMissing"))).render().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'healthcheck' responds with unknown model 'ApiMissing'"
        );
    }
}
