//! Paths, operations and parameters.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use super::{AdditionalProperties, Schema};

/// HTTP methods an operation can be bound to.
///
/// Variants are declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Delete,
    Get,
    Post,
    Put,
}

impl Method {
    /// All supported methods in emission order.
    pub const ALL: [Method; 4] = [Method::Delete, Method::Get, Method::Post, Method::Put];

    /// Lowercase key used in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Delete => "delete",
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Operations bound to a single path template.
///
/// Keys other than the supported methods (e.g. path-level `parameters`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub delete: Option<Operation>,
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
}

impl PathItem {
    /// Get the operation for a method.
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Delete => self.delete.as_ref(),
            Method::Get => self.get.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Put => self.put.as_ref(),
        }
    }

    /// Iterate the declared operations in emission order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// One HTTP method bound to one path template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub operation_id: String,

    /// Declared parameters; order fixes argument and query order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub responses: BTreeMap<String, Response>,

    /// Security requirement objects; only the first one is honored.
    #[serde(default)]
    pub security: Vec<BTreeMap<String, Vec<String>>>,
}

impl Operation {
    /// Reference of the `200` response schema, if any.
    pub fn response_reference(&self) -> Option<&str> {
        self.responses
            .get("200")?
            .schema
            .as_ref()?
            .reference
            .as_deref()
    }

    /// Scheme keys named by the first security requirement.
    pub fn security_keys(&self) -> Vec<&str> {
        self.security
            .first()
            .map(|req| req.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Select the authentication scheme.
    ///
    /// Bearer is the default when no requirement is declared. Returns the
    /// offending key when the first requirement names an unknown scheme.
    pub fn security_scheme(&self) -> Result<SecurityScheme, String> {
        match self.security_keys().first() {
            None => Ok(SecurityScheme::BearerToken),
            Some(key) => SecurityScheme::from_key(key).ok_or_else(|| key.to_string()),
        }
    }

    /// Parameters bound to a given location, in declaration order.
    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }
}

/// A response entry; only its schema matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub schema: Option<Schema>,
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Body => "body",
        }
    }
}

/// A named input to an operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub items: Option<Box<Schema>>,

    /// Full schema of a body parameter.
    pub schema: Option<Schema>,

    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default)]
    pub description: String,

    pub format: Option<String>,
}

impl Parameter {
    /// The type descriptor of this parameter.
    ///
    /// Body parameters carry a full schema; other locations describe their
    /// type inline.
    pub fn descriptor(&self) -> Schema {
        match (&self.location, &self.schema) {
            (ParameterLocation::Body, Some(schema)) => schema.clone(),
            _ => Schema {
                kind: self.kind.clone(),
                reference: None,
                items: self.items.clone(),
                additional_properties: self.additional_properties.clone(),
                description: self.description.clone(),
                format: self.format.clone(),
            },
        }
    }
}

/// Authentication scheme selector; carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityScheme {
    BasicAuth,
    BearerToken,
}

impl SecurityScheme {
    /// Map a security requirement key to a scheme.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "BasicAuth" => Some(SecurityScheme::BasicAuth),
            "HttpKeyAuth" | "BearerToken" => Some(SecurityScheme::BearerToken),
            _ => None,
        }
    }
}
