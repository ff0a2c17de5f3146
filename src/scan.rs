//! Input-directory listing.
//!
//! The batch loop needs two guarantees from the listing: it is a snapshot
//! (files appearing mid-run are not picked up) and it is deterministic
//! (lexicographic byte order on file names, so the same input set always
//! processes, and fails, in the same order).
//!
//! Every entry the directory contains is returned, dotfiles and
//! subdirectories included. There is no extension filter: whether an entry
//! is a usable image is decided by the decoder, and a non-image entry
//! aborts the run there. A preprocessor that quietly skips entries would
//! hide dataset corruption instead of surfacing it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input directory not found: {0}")]
    NotFound(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the file names in `dir`, sorted lexicographically.
///
/// Names are returned verbatim (no path components, no extension mangling)
/// so the batch loop can reuse them unchanged for the output files.
pub fn list_entries(dir: &Path) -> Result<Vec<OsString>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name());
    }

    names.sort();
    Ok(names)
}
