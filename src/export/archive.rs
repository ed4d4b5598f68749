use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Pack every file below `src_dir` into a deflate zip at `dest`, replacing any existing file
///
/// Entry names are paths relative to `src_dir` with `/` separators. Returns the number of
/// file entries written.
pub fn create_zip(src_dir: &Path, dest: &Path) -> Result<usize> {
    let file = File::create(dest)
        .with_context(|| format!("Failed to create archive: {}", dest.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(src_dir).min_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk export directory: {}", src_dir.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .context("Export entry outside of the export directory")?;
        let name = entry_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(name.as_str(), options)
                .with_context(|| format!("Failed to add directory {} to archive", name))?;
            continue;
        }

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", name))?;
        let mut source = File::open(entry.path())
            .with_context(|| format!("Failed to open {}", entry.path().display()))?;
        io::copy(&mut source, &mut zip)
            .with_context(|| format!("Failed to compress {}", entry.path().display()))?;
        entries += 1;
    }

    zip.finish().with_context(|| format!("Failed to finish archive: {}", dest.display()))?;
    Ok(entries)
}

fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
