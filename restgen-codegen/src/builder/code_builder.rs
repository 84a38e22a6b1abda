//! Text sink that turns code fragments into indented source.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered lines at a tracked indentation depth.
///
/// Generators describe code as [`CodeFragment`]s and hand them to
/// [`emit`](Self::emit); only the few lines that sit outside any node, such
/// as a file banner, are pushed directly.
///
/// ```
/// use restgen_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.push_line("/* banner */");
/// builder.apply_fragment(CodeFragment::block(
///     "fn main() {",
///     vec![CodeFragment::line("run();")],
/// ));
/// assert_eq!(builder.build(), "/* banner */\nfn main() {\n    run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Append one line at the current depth.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Render every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Render a single fragment, recursing into nested ones.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => self.write_doc(&text),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.depth += 1;
        for f in fragments {
            self.apply_fragment(f);
        }
        self.depth -= 1;
    }

    fn write_doc(&mut self, text: &str) {
        if text.is_empty() {
            self.push_line("///");
        } else {
            self.push_line(&format!("/// {}", text));
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
