//! Rust type mapper implementation.
//!
//! Stored values (struct fields) are owned; builder arguments borrow where
//! the owned form would force callers to allocate.

use restgen_codegen::TypeMapper;
use restgen_ir::{EndpointParam, Primitive, ValueType};

/// Rust type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Borrowed argument type, before optional wrapping.
    fn map_borrowed(&self, ty: &ValueType) -> String {
        match ty {
            ValueType::Primitive(Primitive::String) => "&str".to_string(),
            ValueType::Primitive(primitive) => self.map_primitive(*primitive).to_string(),
            ValueType::Array(element) => format!("&[{}]", self.map_value_type(element)),
            ValueType::Map(_) | ValueType::Model(_) => format!("&{}", self.map_value_type(ty)),
        }
    }
}

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Integer => "i32",
            Primitive::Number => "f32",
            Primitive::Boolean => "bool",
            Primitive::String => "String",
        }
    }

    fn map_value_type(&self, ty: &ValueType) -> String {
        match ty {
            ValueType::Primitive(primitive) => self.map_primitive(*primitive).to_string(),
            ValueType::Array(element) => format!("Vec<{}>", self.map_value_type(element)),
            ValueType::Map(value) => format!("HashMap<String, {}>", self.map_value_type(value)),
            ValueType::Model(name) => name.clone(),
        }
    }

    fn map_param_type(&self, param: &EndpointParam) -> String {
        let borrowed = self.map_borrowed(&param.ty);
        if param.required {
            borrowed
        } else {
            self.map_optional(&borrowed)
        }
    }

    fn map_response_type(&self, response: Option<&str>) -> String {
        response.unwrap_or("()").to_string()
    }
}
