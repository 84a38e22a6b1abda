//! Lower phase - transforms the document to the API IR.
//!
//! This module turns the decoded document into the language-neutral API IR
//! that generators consume. Every name is passed through the naming
//! convention here, so generators never see source names except as wire
//! names.

use eyre::{Result, WrapErr, eyre};
use restgen_core::strip_newlines;
use restgen_ir::{
    ApiIR, ApiMeta, AuthScheme, Endpoint, EndpointParam, HttpMethod, Model, ModelField,
    ParamLocation,
};
use restgen_schema::{Definition, Document, Method, Operation, ParameterLocation, SecurityScheme};

use crate::{
    NamingConvention, TypeResolver,
    pipeline::{CompilationContext, Diagnostic, GenerateOptions, Phase},
};

/// Phase that transforms the document into API IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the API document to API IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let lowering = Lowering {
            document: &ctx.document,
            options: &ctx.options,
            naming: &ctx.naming,
            resolver: TypeResolver::new(&ctx.document, &ctx.naming),
        };
        let ir = lowering.lower(&mut ctx.diagnostics)?;
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Borrowed state shared by the lowering functions.
struct Lowering<'a> {
    document: &'a Document,
    options: &'a GenerateOptions,
    naming: &'a NamingConvention,
    resolver: TypeResolver<'a>,
}

impl Lowering<'_> {
    fn lower(&self, diagnostics: &mut Vec<Diagnostic>) -> Result<ApiIR> {
        let models = self
            .document
            .definitions
            .iter()
            .map(|(name, definition)| self.lower_model(name, definition))
            .collect::<Result<Vec<_>>>()?;

        let mut endpoints = Vec::with_capacity(self.document.operation_count());
        for (path, method, operation) in self.document.operations() {
            let endpoint = self.lower_endpoint(path, method, operation)?;
            if endpoint.response.is_none() {
                diagnostics.push(
                    Diagnostic::info(
                        "lower",
                        format!(
                            "operation '{}' has no 200 response schema; builder returns RestRequest<()>",
                            operation.operation_id
                        ),
                    )
                    .at(format!("paths.{}.{}", path, method.as_str())),
                );
            }
            endpoints.push(endpoint);
        }

        Ok(ApiIR {
            meta: ApiMeta {
                namespace: self.options.namespace.clone(),
                banner: self.options.banner.clone(),
            },
            models,
            endpoints,
        })
    }

    fn lower_model(&self, name: &str, definition: &Definition) -> Result<Model> {
        let fields = definition
            .properties
            .iter()
            .map(|(prop_name, schema)| {
                let ty = self.resolver.resolve(schema).wrap_err_with(|| {
                    format!("in property '{}' of definition '{}'", prop_name, name)
                })?;
                Ok(ModelField {
                    name: self.naming.field_name(prop_name),
                    wire_name: prop_name.clone(),
                    ty,
                    description: description(&schema.description),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Model {
            name: self.naming.type_name(name),
            source_name: name.to_string(),
            description: description(&definition.description),
            fields,
        })
    }

    fn lower_endpoint(&self, path: &str, method: Method, operation: &Operation) -> Result<Endpoint> {
        let auth = match operation.security_scheme() {
            Ok(SecurityScheme::BasicAuth) => AuthScheme::Basic,
            Ok(SecurityScheme::BearerToken) => AuthScheme::Bearer,
            Err(key) => {
                return Err(eyre!(
                    "operation '{}' uses unsupported security scheme '{}'",
                    operation.operation_id,
                    key
                ));
            }
        };

        let params = operation
            .parameters
            .iter()
            .map(|parameter| {
                let ty = self
                    .resolver
                    .resolve(&parameter.descriptor())
                    .wrap_err_with(|| {
                        format!(
                            "in parameter '{}' of operation '{}'",
                            parameter.name, operation.operation_id
                        )
                    })?;
                Ok(EndpointParam {
                    name: self.naming.field_name(&parameter.name),
                    wire_name: parameter.name.clone(),
                    location: lower_location(parameter.location),
                    required: parameter.required,
                    ty,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let response = operation
            .response_reference()
            .map(|reference| self.resolver.model_name(reference))
            .transpose()
            .wrap_err_with(|| format!("in response of operation '{}'", operation.operation_id))?;

        Ok(Endpoint {
            fn_name: self
                .naming
                .fn_name(&self.options.strip_operation_prefix(&operation.operation_id)),
            operation_id: operation.operation_id.clone(),
            summary: description(&operation.summary),
            path: path.to_string(),
            method: lower_method(method),
            auth,
            params,
            response,
        })
    }
}

/// Collapse a description to one line; empty becomes `None`.
fn description(text: &str) -> Option<String> {
    let text = strip_newlines(text);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn lower_method(method: Method) -> HttpMethod {
    match method {
        Method::Delete => HttpMethod::Delete,
        Method::Get => HttpMethod::Get,
        Method::Post => HttpMethod::Post,
        Method::Put => HttpMethod::Put,
    }
}

fn lower_location(location: ParameterLocation) -> ParamLocation {
    match location {
        ParameterLocation::Path => ParamLocation::Path,
        ParameterLocation::Query => ParamLocation::Query,
        ParameterLocation::Body => ParamLocation::Body,
    }
}
