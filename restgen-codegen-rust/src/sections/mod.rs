//! Items that make up the generated bindings file.
//!
//! - [`Prelude`] - runtime types every builder relies on
//! - [`ModelItems`] - one struct and its serializer per definition
//! - [`EndpointFn`] - one request builder per operation

mod endpoint;
mod model;
mod prelude;

pub use endpoint::EndpointFn;
pub use model::ModelItems;
pub use prelude::{Prelude, TO_REST_STRING};

/// Quote text as a Rust string literal.
pub(crate) fn string_literal(text: &str) -> String {
    format!("{:?}", text)
}

/// Quote text as a `format!` string literal, escaping braces.
pub(crate) fn format_literal(text: &str, placeholder_suffix: &str) -> String {
    let escaped = text.replace('{', "{{").replace('}', "}}");
    string_literal(&format!("{}{}", escaped, placeholder_suffix))
}
