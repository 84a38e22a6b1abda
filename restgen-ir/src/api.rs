//! API Intermediate Representation.
//!
//! # Architecture
//!
//! ```text
//! Document (decoding) → ApiIR (lowering) → Generator (codegen)
//! ```

use serde::Serialize;

use crate::{HttpMethod, ValueType};

/// API IR - unified representation for code generation.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIR {
    /// Generation metadata.
    pub meta: ApiMeta,
    /// Data structures, ordered by definition name.
    pub models: Vec<Model>,
    /// Request builders, grouped by path then method.
    pub endpoints: Vec<Endpoint>,
}

impl ApiIR {
    /// Returns true if any model or endpoint parameter uses a map type.
    pub fn uses_map(&self) -> bool {
        self.models
            .iter()
            .flat_map(|m| &m.fields)
            .any(|f| f.ty.uses_map())
            || self
                .endpoints
                .iter()
                .flat_map(|e| &e.params)
                .any(|p| p.ty.uses_map())
    }

    /// Look up a model by its type name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Generation metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiMeta {
    /// Opaque sub-namespace tag supplied by the caller.
    pub namespace: Option<String>,
    /// First line of the generated artifact.
    pub banner: String,
}

/// A data structure generated from one definition.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    /// Type name in generated code.
    pub name: String,
    /// Definition name in the document.
    pub source_name: String,
    pub description: Option<String>,
    /// Fields ordered by property name.
    pub fields: Vec<ModelField>,
}

/// A field of a generated structure.
#[derive(Debug, Clone, Serialize)]
pub struct ModelField {
    /// Normalized field name.
    pub name: String,
    /// Property name in the document and on the wire.
    pub wire_name: String,
    pub ty: ValueType,
    pub description: Option<String>,
}

impl ModelField {
    /// Returns true if the field name differs from its wire name.
    pub fn is_renamed(&self) -> bool {
        self.name != self.wire_name
    }
}

/// Authentication scheme an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthScheme {
    /// Username and password.
    Basic,
    /// A single token.
    Bearer,
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// A request builder generated from one operation.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    /// Function name in generated code.
    pub fn_name: String,
    /// Operation id in the document.
    pub operation_id: String,
    pub summary: Option<String>,
    /// Path template with `{name}` placeholders.
    pub path: String,
    pub method: HttpMethod,
    pub auth: AuthScheme,
    /// Parameters in declaration order.
    pub params: Vec<EndpointParam>,
    /// Type name of the `200` response model, if any.
    pub response: Option<String>,
}

impl Endpoint {
    /// Parameters bound to a location, in declaration order.
    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &EndpointParam> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// The body parameter, if any.
    pub fn body(&self) -> Option<&EndpointParam> {
        self.params_in(ParamLocation::Body).next()
    }
}

/// A parameter of a request builder.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointParam {
    /// Normalized argument name.
    pub name: String,
    /// Parameter name in the document, used for placeholders and query keys.
    pub wire_name: String,
    pub location: ParamLocation,
    pub required: bool,
    pub ty: ValueType,
}

impl EndpointParam {
    /// Placeholder this parameter replaces in the path template.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.wire_name)
    }
}
