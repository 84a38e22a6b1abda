//! Shared fixtures for unit tests.

use restgen_core::{to_camel_case, to_snake_case, to_title_case};
use restgen_schema::Document;

use crate::NamingConvention;

fn operation_to_fn(name: &str) -> String {
    to_snake_case(&to_camel_case(name))
}

fn escape(name: &str) -> String {
    format!("r#{}", name)
}

/// A Rust-like naming convention with a short reserved word list.
pub const NAMING: NamingConvention = NamingConvention {
    definition_to_type: to_title_case,
    operation_to_fn,
    property_to_field: to_snake_case,
    reserved_words: &["type", "match"],
    escape_reserved: escape,
};

/// Parse a document, panicking on invalid test input.
pub fn document(json: &str) -> Document {
    json.parse().expect("Failed to parse test document")
}
