//! File helpers shared by the patch and extract commands.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` without ever exposing a truncated file.
///
/// Writes to a temp file beside the target, syncs it, then renames it over the
/// target. An existing target keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
