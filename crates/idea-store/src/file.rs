//! Reading and rewriting the ideas file.
//!
//! The file is a single JSON array, rewritten in full on every save. Writes go
//! to a sibling temp file first and are renamed into place, so a crash
//! mid-write leaves the previous contents intact. An existing file keeps its
//! permissions, and a symlinked store is written through to its target.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use idea_core::entities::Idea;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::StoreError;

const INDENT: &[u8] = b"    ";

/// Load every idea from `path`.
///
/// A missing file, or one holding only whitespace, is an empty collection.
///
/// # Errors
///
/// Returns [`StoreError::Read`] if the file exists but cannot be read, and
/// [`StoreError::Corrupt`] if its contents are not a JSON array of ideas.
pub fn load(path: &Path) -> Result<Vec<Idea>, StoreError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "ideas file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if raw.trim().is_empty() {
        tracing::warn!(path = %path.display(), "ideas file is empty, treating as no ideas");
        return Ok(Vec::new());
    }

    let ideas: Vec<Idea> = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = ideas.len(), "loaded ideas");
    Ok(ideas)
}

/// Rewrite `path` with the full collection.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`StoreError::Write`] if any step of the write or the final
/// rename fails. The previous file contents are left in place.
pub fn save(path: &Path, ideas: &[Idea]) -> Result<(), StoreError> {
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path);
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let bytes = to_pretty_json(ideas).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    if let Ok(existing) = std::fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), count = ideas.len(), "saved ideas");
    Ok(())
}

/// The file a save should replace: the symlink target when `path` is a link
/// to an existing file, `path` itself otherwise.
fn resolve_target(path: &Path) -> PathBuf {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Serialize with a four-space indent and a trailing newline.
fn to_pretty_json(ideas: &[Idea]) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(256 * ideas.len().max(1));
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    ideas.serialize(&mut ser).map_err(std::io::Error::other)?;
    buf.push(b'\n');
    Ok(buf)
}
