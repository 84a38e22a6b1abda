//! Runtime types emitted once at the top of the bindings.

use restgen_codegen::Renderable;

use crate::{Enum, Field, Fn, Impl, Param, Struct, Trait, Use, Variant};

/// Name of the serialization trait every model implements.
pub const TO_REST_STRING: &str = "ToRestString";

/// The request descriptor, authentication and serialization runtime.
///
/// The `HashMap` import and serializer impl are only emitted when some
/// model or argument uses a map.
#[derive(Debug, Clone, Copy)]
pub struct Prelude {
    uses_map: bool,
}

impl Prelude {
    pub fn new(uses_map: bool) -> Self {
        Self { uses_map }
    }

    /// Imports the prelude needs.
    pub fn uses(&self) -> Vec<Use> {
        let mut uses = Vec::new();
        if self.uses_map {
            uses.push(Use::new("std::collections").symbol("HashMap"));
        }
        uses
    }

    /// Items in emission order.
    pub fn items(&self) -> Vec<Box<dyn Renderable>> {
        let mut items: Vec<Box<dyn Renderable>> = vec![
            Box::new(authentication()),
            Box::new(method()),
            Box::new(rest_request()),
            Box::new(to_rest_string_trait()),
            Box::new(primitive_impl(
                "String",
                r#"format!("\"{}\"", self.replace('\\', "\\\\").replace('"', "\\\""))"#,
            )),
            Box::new(primitive_impl("i32", "self.to_string()")),
            Box::new(primitive_impl("f32", "self.to_string()")),
            Box::new(primitive_impl("bool", "self.to_string()")),
            Box::new(generic_impl("Vec<T>", "self.as_slice().to_rest_string()")),
            Box::new(generic_impl(
                "[T]",
                "let items: Vec<String> = self.iter().map(ToRestString::to_rest_string).collect();\n\
                 format!(\"[{}]\", items.join(\", \"))",
            )),
        ];

        if self.uses_map {
            items.push(Box::new(generic_impl(
                "HashMap<String, T>",
                "if self.is_empty() {\n    \
                 return \"{}\".to_string();\n\
                 }\n\
                 let mut entries: Vec<String> = self\n    \
                 .iter()\n    \
                 .map(|(key, value)| format!(\"{}: {}\", key.to_rest_string(), value.to_rest_string()))\n    \
                 .collect();\n\
                 entries.sort();\n\
                 format!(\"{{ {} }}\", entries.join(\", \"))",
            )));
        }

        items
    }
}

fn authentication() -> Enum {
    Enum::new("Authentication")
        .doc("Credentials attached to a request.")
        .derive("Debug")
        .derive("Clone")
        .derive("PartialEq")
        .variant(
            Variant::new("Basic")
                .field("username", "String")
                .field("password", "String"),
        )
        .variant(Variant::new("Bearer").field("token", "String"))
}

fn method() -> Enum {
    ["Delete", "Get", "Post", "Put"].into_iter().fold(
        Enum::new("Method")
            .derive("Debug")
            .derive("Clone")
            .derive("Copy")
            .derive("PartialEq")
            .derive("Eq"),
        |e, name| e.variant(Variant::new(name)),
    )
}

fn rest_request() -> Struct {
    Struct::new("RestRequest")
        .generic("Response")
        .doc("An unsent request; `Response` is the type its reply decodes to.")
        .derive("Debug")
        .field(Field::new("authentication", "Authentication"))
        .field(Field::new("urlpath", "String"))
        .field(Field::new("query_params", "String"))
        .field(Field::new("body", "String"))
        .field(Field::new("method", "Method"))
        .field(Field::new("_marker", "std::marker::PhantomData<Response>").private())
}

fn to_rest_string_fn(body: &str) -> Fn {
    Fn::new("to_rest_string")
        .private()
        .param(Param::receiver("&self"))
        .returns("String")
        .body(body)
}

fn to_rest_string_trait() -> Trait {
    Trait::new(TO_REST_STRING)
        .doc("JSON text of a value, used to build request bodies.")
        .method(to_rest_string_fn(""))
}

fn primitive_impl(ty: &str, body: &str) -> Impl {
    Impl::new(ty)
        .for_trait(TO_REST_STRING)
        .method(to_rest_string_fn(body))
}

fn generic_impl(ty: &str, body: &str) -> Impl {
    Impl::new(ty)
        .generic(format!("T: {}", TO_REST_STRING))
        .for_trait(TO_REST_STRING)
        .method(to_rest_string_fn(body))
}
