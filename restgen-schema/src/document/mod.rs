//! API document types and parsing.
//!
//! The document is decoded once and is read-only afterwards. Name-keyed
//! collections are `BTreeMap`s so that every traversal is ordered by name
//! regardless of the order used in the input file.

mod file;
mod operation;
mod parse;
mod validate;

use std::collections::BTreeMap;

pub use file::SchemaFile;
pub use operation::{Method, Operation, Parameter, ParameterLocation, PathItem, SecurityScheme};
use serde::Deserialize;
pub use parse::parse_document;
pub use validate::ParseContext;

/// Root of a decoded API description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Named schema types, keyed by definition name.
    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,

    /// URL path templates and the operations bound to them.
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

impl Document {
    /// Look up the definition a `$ref` points to.
    pub fn resolve(&self, reference: &str) -> Option<(&str, &Definition)> {
        let name = reference.strip_prefix(DEFINITIONS_REF)?;
        self.definitions
            .get_key_value(name)
            .map(|(name, def)| (name.as_str(), def))
    }

    /// Iterate all operations grouped by path, then by method.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (path.as_str(), method, op))
        })
    }

    /// Count of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.operations().count()
    }
}

/// Prefix every definition reference carries.
pub const DEFINITIONS_REF: &str = "#/definitions/";

/// A named schema type made of properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
}

/// Type descriptor shared by properties, array items, map values and body schemas.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Primitive or container kind (`integer`, `array`, `object`, ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Reference to a definition, e.g. `#/definitions/Account`.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Element descriptor for arrays.
    pub items: Option<Box<Schema>>,

    /// Value descriptor for string-keyed maps.
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default)]
    pub description: String,

    pub format: Option<String>,
}

impl Schema {
    /// Every `$ref` reachable from this descriptor, outermost first.
    pub fn references(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a str>) {
        if let Some(reference) = &self.reference {
            refs.push(reference);
        }
        if let Some(items) = &self.items {
            items.collect_references(refs);
        }
        if let Some(AdditionalProperties::Schema(value)) = &self.additional_properties {
            value.collect_references(refs);
        }
    }
}

/// `additionalProperties` is either a boolean switch or a value schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

impl AdditionalProperties {
    /// The value schema, if one was given.
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            AdditionalProperties::Schema(schema) => Some(schema),
            AdditionalProperties::Allowed(_) => None,
        }
    }
}
