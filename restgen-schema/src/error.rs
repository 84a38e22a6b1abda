use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for restgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON decoding error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span_at(&self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config error from a TOML decoding error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a banner that is not a Rust comment.
    pub fn invalid_banner_error(&self, banner: impl Into<String>) -> Box<Error> {
        let span = line_span(&self.src, "banner");
        Box::new(Error::InvalidBanner {
            src: self.named_source(),
            span,
            banner: banner.into(),
        })
    }

    /// Create an unresolved reference error.
    pub fn unresolved_reference_error(
        &self,
        reference: impl Into<String>,
        location: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnresolvedReference {
            src: self.named_source(),
            span,
            reference: reference.into(),
            location: location.into(),
        })
    }

    /// Create an invalid reference error.
    pub fn invalid_reference_error(
        &self,
        reference: impl Into<String>,
        location: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidReference {
            src: self.named_source(),
            span,
            reference: reference.into(),
            location: location.into(),
        })
    }
}

/// Convert a 1-based line/column pair into a source span.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    Some(SourceSpan::from((offset, 0)))
}

/// Span of the first line whose first token is `key`.
fn line_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with(key) {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, trimmed.trim_end().len())));
        }
        offset += line.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(restgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode API document")]
    #[diagnostic(code(restgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("decode error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse generator config")]
    #[diagnostic(code(restgen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("banner is not a Rust comment: '{banner}'")]
    #[diagnostic(
        code(restgen::invalid_banner),
        help("start the banner with '//' or wrap it in '/* ... */'")
    )]
    InvalidBanner {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a comment")]
        span: Option<SourceSpan>,
        banner: String,
    },

    #[error("unresolved reference '{reference}' in {location}")]
    #[diagnostic(
        code(restgen::unresolved_reference),
        help("declare the definition under 'definitions' or fix the reference name")
    )]
    UnresolvedReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("no such definition")]
        span: Option<SourceSpan>,
        reference: String,
        location: String,
    },

    #[error("invalid reference '{reference}' in {location}")]
    #[diagnostic(
        code(restgen::invalid_reference),
        help("references must point into the document, e.g. '#/definitions/Account'")
    )]
    InvalidReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported reference")]
        span: Option<SourceSpan>,
        reference: String,
        location: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_first_line() {
        let span = span_at("{\"a\": 1}", 1, 3).unwrap();
        assert_eq!(span.offset(), 2);
    }

    #[test]
    fn test_span_at_later_line() {
        let span = span_at("{\n  \"a\": x\n}", 2, 8).unwrap();
        assert_eq!(span.offset(), 9);
    }

    #[test]
    fn test_span_at_clamps_to_source() {
        let span = span_at("{}", 1, 40).unwrap();
        assert_eq!(span.offset(), 2);
    }

    #[test]
    fn test_line_span_finds_key() {
        let src = "[generator]\n  banner = \"x\"\n";
        let span = line_span(src, "banner").unwrap();
        assert_eq!(span.offset(), 14);
        assert_eq!(span.len(), 12);
        assert!(line_span(src, "namespace").is_none());
    }

    #[test]
    fn test_span_at_without_position() {
        assert!(span_at("{}", 0, 0).is_none());
    }
}
