//! Rust AST builders for generating structs, enums, traits, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax. Every node
//! implements [`Renderable`](restgen_codegen::Renderable) and is turned into
//! text by a [`CodeBuilder`](restgen_codegen::CodeBuilder).

mod enums;
mod fns;
mod impls;
mod structs;
mod traits;

pub use enums::{Enum, Variant};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use traits::Trait;

use restgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Render a node on its own with Rust indentation.
pub(crate) fn build(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::rust();
    builder.emit(node);
    builder.build()
}

/// Doc comment and `#[...]` attribute lines shared by items.
pub(crate) fn item_prelude(
    doc: Option<&str>,
    derives: &[String],
    attrs: &[String],
) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();

    if let Some(doc) = doc {
        fragments.push(CodeFragment::doc(doc));
    }

    if !derives.is_empty() {
        fragments.push(CodeFragment::line(format!(
            "#[derive({})]",
            derives.join(", ")
        )));
    }

    for attr in attrs {
        fragments.push(CodeFragment::line(format!("#[{}]", attr)));
    }

    fragments
}

pub(crate) fn visibility(is_public: bool) -> &'static str {
    if is_public { "pub " } else { "" }
}
