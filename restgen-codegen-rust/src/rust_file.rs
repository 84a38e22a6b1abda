//! RustFile abstraction for structured Rust file generation.
//!
//! A file is a banner, grouped `use` statements and body items separated
//! by blank lines.

use restgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    /// Create a use statement for a module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    /// Add a symbol to import from the module.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Add multiple symbols to import.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Import group in rustfmt order: standard library, external crates, local.
    fn group(&self) -> u8 {
        let root = self.module.split("::").next().unwrap_or_default();
        match root {
            "std" | "core" | "alloc" => 0,
            "crate" | "self" | "super" => 2,
            _ => 1,
        }
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// # Example
///
/// ```ignore
/// let code = RustFile::new()
///     .header("/* Code generated by restgen. DO NOT EDIT. */")
///     .use_stmt(Use::new("nanoserde").symbol("DeJson"))
///     .add(model_struct)
///     .add(model_impl)
///     .render();
/// ```
#[derive(Default)]
pub struct RustFile {
    header: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first line of the file, e.g. a generation banner.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::RUST)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut needs_blank = false;

        if let Some(header) = &self.header {
            builder.push_line(header);
            needs_blank = true;
        }

        let mut uses = self.uses.clone();
        uses.sort_by_key(Use::group);
        let mut last_group = None;
        for use_stmt in &uses {
            let group = use_stmt.group();
            if needs_blank || last_group.is_some_and(|last| last != group) {
                builder.push_blank();
                needs_blank = false;
            }
            builder.emit(use_stmt);
            last_group = Some(group);
        }
        needs_blank |= !uses.is_empty();

        for fragments in &self.body {
            if needs_blank {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            needs_blank = true;
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.uses.is_empty() && self.body.is_empty()
    }
}
