//! Language-agnostic code generation traits.

use eyre::Result;
use restgen_ir::{EndpointParam, Primitive, ValueType};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting bindings in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for the generated artifact (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Render the complete artifact.
    fn render(&self) -> Result<String>;
}

/// Trait for mapping value types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive to its owned type
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Map a value type to the type used for stored data (struct fields)
    fn map_value_type(&self, ty: &ValueType) -> String;

    /// Map a value type to the type used for a function argument
    fn map_param_type(&self, param: &EndpointParam) -> String;

    /// Wrap a type as optional (e.g., `Option<T>` in Rust)
    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }

    /// Map the response model of an endpoint, or the unit type when absent
    fn map_response_type(&self, response: Option<&str>) -> String;
}
