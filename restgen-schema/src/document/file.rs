use std::path::{Path, PathBuf};

use super::{Document, parse::parse_document};
use crate::{Error, Result};

/// An API document file with both raw content and decoded document.
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    document: Document,
}

impl SchemaFile {
    /// Open and parse an API document file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let document = parse_document(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the decoded document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the file, keeping only the decoded document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
