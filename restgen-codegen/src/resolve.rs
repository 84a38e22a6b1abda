//! Resolution of schema descriptors to value types.
//!
//! | Schema kind                  | Value type                 |
//! |------------------------------|----------------------------|
//! | `integer`                    | `Primitive(Integer)`       |
//! | `number`                     | `Primitive(Number)`        |
//! | `boolean`                    | `Primitive(Boolean)`       |
//! | `string`                     | `Primitive(String)`        |
//! | `array` of primitive or ref  | `Array(element)`           |
//! | `object` with primitive map  | `Map(value)`               |
//! | `$ref`                       | `Model(name)`              |
//!
//! Every other shape is a [`ResolveError`].

use restgen_ir::{Primitive, ValueType};
use restgen_schema::{Document, Schema};
use thiserror::Error;

use crate::NamingConvention;

/// A descriptor that cannot be mapped to a value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unsupported type '{0}'")]
    UnsupportedType(String),

    #[error("missing type: descriptor has neither 'type' nor '$ref'")]
    MissingType,

    #[error("unsupported {container} element: {element}")]
    UnsupportedCollection {
        container: &'static str,
        element: String,
    },

    #[error("array descriptor has no 'items'")]
    MissingItems,

    #[error("object descriptor has no 'additionalProperties' value schema")]
    MissingMapValue,

    #[error("unresolved reference '{0}'")]
    UnresolvedReference(String),
}

/// Maps schema descriptors to value types.
///
/// The resolver only reads the document.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    document: &'a Document,
    naming: &'a NamingConvention,
}

impl<'a> TypeResolver<'a> {
    pub fn new(document: &'a Document, naming: &'a NamingConvention) -> Self {
        Self { document, naming }
    }

    /// Resolve a descriptor to a value type.
    pub fn resolve(&self, schema: &Schema) -> Result<ValueType, ResolveError> {
        if let Some(reference) = &schema.reference {
            return self.resolve_reference(reference);
        }

        let kind = schema.kind.as_deref().ok_or(ResolveError::MissingType)?;
        if let Some(primitive) = Primitive::from_kind(kind) {
            return Ok(ValueType::Primitive(primitive));
        }

        match kind {
            "array" => {
                let items = schema.items.as_deref().ok_or(ResolveError::MissingItems)?;
                let element = self.resolve(items)?;
                if element.is_collection() {
                    return Err(ResolveError::UnsupportedCollection {
                        container: "array",
                        element: describe(&element),
                    });
                }
                Ok(ValueType::Array(Box::new(element)))
            }
            "object" => {
                let value = schema
                    .additional_properties
                    .as_ref()
                    .and_then(|ap| ap.schema())
                    .ok_or(ResolveError::MissingMapValue)?;
                let value = self.resolve(value)?;
                if !matches!(value, ValueType::Primitive(_)) {
                    return Err(ResolveError::UnsupportedCollection {
                        container: "map",
                        element: describe(&value),
                    });
                }
                Ok(ValueType::Map(Box::new(value)))
            }
            other => Err(ResolveError::UnsupportedType(other.to_string())),
        }
    }

    /// Resolve a `$ref` to a model value type.
    pub fn resolve_reference(&self, reference: &str) -> Result<ValueType, ResolveError> {
        self.model_name(reference).map(ValueType::Model)
    }

    /// Type name of the definition a `$ref` points to.
    pub fn model_name(&self, reference: &str) -> Result<String, ResolveError> {
        let (name, _) = self
            .document
            .resolve(reference)
            .ok_or_else(|| ResolveError::UnresolvedReference(reference.to_string()))?;
        Ok(self.naming.type_name(name))
    }
}

fn describe(ty: &ValueType) -> String {
    match ty {
        ValueType::Primitive(p) => p.as_str().to_string(),
        ValueType::Array(_) => "array".to_string(),
        ValueType::Map(_) => "map".to_string(),
        ValueType::Model(name) => format!("reference to {}", name),
    }
}
