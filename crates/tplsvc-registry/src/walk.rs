//! Directory discovery and file decoding shared by both loaders.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::LoadError;

/// Recursively collect regular files under `dir` whose extension is one of
/// `extensions`.
///
/// Entries are sorted by file name within each directory so the order is
/// stable for a fixed tree. Symlinks are not followed.
pub(crate) fn discover(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::Walk {
            dir: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if matches {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read a file and decode it as UTF-8.
pub(crate) fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// File name with the final extension stripped (`a.schema.json` → `a.schema`).
pub(crate) fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
