use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::json::marshal_indent;

/// Destination for export files, addressed by paths relative to the export root
pub trait ExportSink {
    /// Persist `bytes` at `relative`, creating parent directories and replacing any existing
    /// file
    fn write(&mut self, relative: &Path, bytes: &[u8]) -> Result<()>;
}

/// Writes export files below a root directory
#[derive(Debug)]
pub struct DirectoryWriter {
    root: PathBuf,
}

impl DirectoryWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ExportSink for DirectoryWriter {
    fn write(&mut self, relative: &Path, bytes: &[u8]) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Render `value` with [`marshal_indent`] and hand it to `sink`
pub fn write_json<S, T>(sink: &mut S, relative: &Path, value: &T) -> Result<()>
where
    S: ExportSink + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = marshal_indent(value)
        .with_context(|| format!("Failed to render {}", relative.display()))?;
    sink.write(relative, &bytes)
}
