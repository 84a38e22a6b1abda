use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::NamedTempFile;
use tracing::debug;

/// A generated artifact waiting to be written.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file atomically.
    ///
    /// The content goes to a temporary file in the destination directory which
    /// is then renamed over the target. On failure the target is left untouched
    /// and the temporary file is removed.
    pub fn write(&self) -> Result<()> {
        write_atomic(&self.path, &self.content)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("failed to create temporary file in '{}'", parent.display()))?;
    temp.write_all(content.as_bytes())
        .wrap_err("failed to write generated content")?;
    temp.flush().wrap_err("failed to flush generated content")?;

    debug!(path = %path.display(), bytes = content.len(), "persisting generated file");
    temp.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
