//! Document parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{Document, validate::ParseContext, validate::validate_document};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "api.swagger.json")
    }
}

impl Document {
    /// Parse an API document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse an API document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }
}

/// Parse a document from content with the given filename for error reporting.
///
/// Decoding is followed by reference resolution, so a returned document
/// never contains a dangling `$ref`.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let source_ctx = SourceContext::new(content, filename);
    let document: Document =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    debug!(
        file = filename,
        definitions = document.definitions.len(),
        paths = document.paths.len(),
        "decoded API document"
    );

    validate_document(&document, &ParseContext::new(content, filename))?;
    Ok(document)
}
