//! Rust trait declaration builder.

use restgen_codegen::{CodeFragment, Renderable};

use super::{Fn, item_prelude, visibility};

/// Builder for trait declarations with required methods only.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    methods: Vec<Fn>,
    is_public: bool,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare a required method; its body is ignored.
    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method.private());
        self
    }

    /// Build the trait as a string.
    pub fn build(&self) -> String {
        super::build(self)
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = item_prelude(self.doc.as_deref(), &[], &[]);
        fragments.push(CodeFragment::block(
            format!("{}trait {} {{", visibility(self.is_public), self.name),
            self.methods
                .iter()
                .map(|m| CodeFragment::line(format!("{};", m.signature())))
                .collect(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_trait_declaration() {
        let t = Trait::new("ToRestString")
            .method(
                Fn::new("to_rest_string")
                    .param(Param::receiver("&self"))
                    .returns("String"),
            )
            .build();
        assert_eq!(
            t,
            "pub trait ToRestString {\n    fn to_rest_string(&self) -> String;\n}\n"
        );
    }
}
