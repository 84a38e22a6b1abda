//! Core type definitions.

use serde::Serialize;

/// Scalar kinds of the schema type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Integer,
    Number,
    Boolean,
    String,
}

impl Primitive {
    /// Parse a schema `type` keyword.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "integer" => Some(Primitive::Integer),
            "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            "string" => Some(Primitive::String),
            _ => None,
        }
    }

    /// Get the schema keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Integer => "integer",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::String => "string",
        }
    }
}

/// A resolved value type.
///
/// Collections hold exactly one level of nesting: the element of an array
/// or the value of a map is a primitive or a model, never another collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum ValueType {
    Primitive(Primitive),
    /// Ordered sequence.
    Array(Box<ValueType>),
    /// Mapping from string keys.
    Map(Box<ValueType>),
    /// A generated structure, by its type name.
    Model(String),
}

impl ValueType {
    pub fn is_string(&self) -> bool {
        matches!(self, ValueType::Primitive(Primitive::String))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, ValueType::Array(_) | ValueType::Map(_))
    }

    /// Returns true if this type or its element needs a map type in scope.
    pub fn uses_map(&self) -> bool {
        match self {
            ValueType::Map(_) => true,
            ValueType::Array(inner) => inner.uses_map(),
            _ => false,
        }
    }
}

/// HTTP method of an endpoint, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Delete,
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Get the uppercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// Name of the matching variant in generated code.
    pub fn variant(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "Delete",
            HttpMethod::Get => "Get",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
        }
    }
}
