//! Whole-file replacement through a temporary sibling

use crate::domain::{ConsoleError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `bytes` to `path` by renaming a fully written temporary file over it
///
/// Readers see either the old or the new contents, never a mix.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        ConsoleError::Persistence(format!("Cannot create temporary file in {}: {e}", parent.display()))
    })?;
    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| ConsoleError::Persistence(format!("Cannot write {}: {e}", path.display())))?;
    temp.persist(path)
        .map_err(|e| ConsoleError::Persistence(format!("Cannot replace {}: {}", path.display(), e.error)))?;
    Ok(())
}
