use std::fs::Permissions;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DocError, Result};
use crate::parser::export::{self, SchemaExportRow};

/// Read and parse the schema export at `path`.
pub fn load_export(path: &Path) -> Result<Vec<SchemaExportRow>> {
    let json = std::fs::read(path).map_err(|e| DocError::io(path, e))?;
    let rows = export::parse_export(&json).map_err(|source| DocError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "loaded schema export");
    Ok(rows)
}

/// Replace the file at `path` with `contents`.
///
/// The document is written to a temporary file next to `path` and renamed
/// over it, so readers see either the old document or the new one. The
/// existing file's permissions carry over; a new file gets `0644` on Unix.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => default_permissions(),
        Err(e) => return Err(DocError::io(path, e)),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| DocError::io(dir, e))?;
    temp.write_all(contents.as_bytes())
        .and_then(|()| match permissions {
            Some(permissions) => temp.as_file().set_permissions(permissions),
            None => Ok(()),
        })
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| DocError::io(temp.path(), e))?;
    temp.persist(path).map_err(|e| DocError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote schema document");
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Whether the file at `path` already holds exactly `contents`. A missing file is stale.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(DocError::io(path, e)),
    }
}
