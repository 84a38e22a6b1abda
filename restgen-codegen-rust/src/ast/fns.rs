//! Rust function builder.

use restgen_codegen::{CodeFragment, Renderable};

use super::{item_prelude, visibility};

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A receiver such as `&self`.
    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn doc_opt(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: &str) -> Self {
        self.body.extend(content.lines().map(CodeFragment::line));
        self
    }

    /// Add structured body content such as nested blocks.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// The signature without a trailing brace, e.g. `pub fn f(a: i32) -> i32`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!(
            "{}fn {}({})",
            visibility(self.is_public),
            self.name,
            params
        );
        if let Some(ret) = &self.return_type {
            signature.push_str(" -> ");
            signature.push_str(ret);
        }
        signature
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        super::build(self)
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = item_prelude(self.doc.as_deref(), &[], &self.attrs);
        fragments.push(CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.clone(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("healthcheck").build();
        assert_eq!(f, "pub fn healthcheck() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "i32"))
            .param(Param::new("b", "i32"))
            .returns("i32")
            .body_line("a + b")
            .build();
        assert_eq!(f, "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n");
    }

    #[test]
    fn test_private_method_with_receiver() {
        let f = Fn::new("to_rest_string")
            .private()
            .param(Param::receiver("&self"))
            .returns("String")
            .build();
        assert!(f.starts_with("fn to_rest_string(&self) -> String {"));
    }

    #[test]
    fn test_fn_with_nested_body() {
        let f = Fn::new("collect")
            .param(Param::new("limit", "Option<i32>"))
            .body_line("let mut query_params = String::new();")
            .body_fragments([CodeFragment::block(
                "if let Some(limit) = limit {",
                vec![CodeFragment::line("query_params.push_str(&limit.to_string());")],
            )])
            .build();
        assert!(f.contains(
            "    if let Some(limit) = limit {\n        query_params.push_str(&limit.to_string());\n    }\n"
        ));
    }

    #[test]
    fn test_fn_with_doc() {
        let f = Fn::new("get_account").doc("Fetch the current user's account.").build();
        assert!(f.starts_with("/// Fetch the current user's account.\n"));
    }
}
