//! Rust enum builder.

use restgen_codegen::{CodeFragment, Renderable};

use super::{Field, item_prelude, visibility};

/// A variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
    pub data: Option<String>,
    pub fields: Vec<Field>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            data: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set tuple data for the variant, e.g., `Foo(Bar)`.
    pub fn tuple(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Add a named field, making this a struct-like variant.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, ty).private());
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = item_prelude(self.doc.as_deref(), &[], &[]);

        if !self.fields.is_empty() {
            fragments.push(CodeFragment::block_with_close(
                format!("{} {{", self.name),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
                "},",
            ));
        } else {
            let line = match &self.data {
                Some(data) => format!("{}({}),", self.name, data),
                None => format!("{},", self.name),
            };
            fragments.push(CodeFragment::line(line));
        }

        fragments
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    variants: Vec<Variant>,
    is_public: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            variants: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        super::build(self)
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = visibility(self.is_public);
        let mut fragments = item_prelude(self.doc.as_deref(), &self.derives, &self.attrs);

        if self.variants.is_empty() {
            fragments.push(CodeFragment::line(format!("{}enum {} {{}}", vis, self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}enum {} {{", vis, self.name),
                self.variants.iter().flat_map(Variant::to_fragments).collect(),
            ));
        }

        fragments
    }
}
