//! Rust impl block builder.

use restgen_codegen::{CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Vec<String>,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: Vec::new(),
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Add a generic parameter to the impl, e.g. `T: ToRestString`.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        super::build(self)
    }

    fn header(&self) -> String {
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        match &self.trait_name {
            Some(trait_name) => format!(
                "impl{} {} for {} {{",
                generics, trait_name, self.type_name
            ),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.header(),
            self.methods_to_fragments(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_empty_impl() {
        let i = Impl::new("Foo").build();
        assert_eq!(i, "impl Foo {\n}\n");
    }

    #[test]
    fn test_impl_for_trait() {
        let i = Impl::new("bool")
            .for_trait("ToRestString")
            .method(
                Fn::new("to_rest_string")
                    .private()
                    .param(Param::receiver("&self"))
                    .returns("String")
                    .body_line("self.to_string()"),
            )
            .build();
        assert_eq!(
            i,
            "impl ToRestString for bool {\n    fn to_rest_string(&self) -> String {\n        self.to_string()\n    }\n}\n"
        );
    }

    #[test]
    fn test_generic_impl() {
        let i = Impl::new("Vec<T>")
            .generic("T: ToRestString")
            .for_trait("ToRestString")
            .build();
        assert!(i.starts_with("impl<T: ToRestString> ToRestString for Vec<T> {"));
    }

    #[test]
    fn test_impl_with_multiple_methods() {
        let i = Impl::new("Foo")
            .method(Fn::new("bar"))
            .method(Fn::new("baz"))
            .build();
        assert!(i.contains("    pub fn bar() {\n    }\n\n    pub fn baz() {"));
    }
}
