//! Reading and writing the `.env` configuration store.
//!
//! The reader strips one layer of quotes from values while the writer never
//! adds any. Generated values are alphanumeric, so the files dockhand writes
//! always read back unchanged; hand-edited values with surrounding quotes or
//! whitespace do not.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::domain::ConfigSet;
use crate::error::{Result, StoreError};

/// Read a previously written configuration store.
///
/// A missing file is an empty set: that is every first run.
///
/// # Errors
///
/// Returns `StoreError::ReadFailed` if the file exists but cannot be read.
pub fn read_persisted(path: &Path) -> Result<ConfigSet> {
    debug!(path = %path.display(), "reading persisted configuration");

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no persisted configuration");
            return Ok(ConfigSet::new());
        }
        Err(source) => {
            return Err(StoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    let set = ConfigSet::parse(&contents);
    debug!(entries = set.len(), "persisted configuration loaded");
    Ok(set)
}

/// Write the configuration store, replacing any existing file.
///
/// The content goes to a temporary file next to `path` which is then renamed
/// over it, so a concurrent reader sees either the old file or the new one.
/// On Unix the file is created with mode `0600`.
///
/// # Errors
///
/// Returns `StoreError::WriteFailed` if any step fails; the destination is
/// left untouched in that case.
pub fn write_persisted(path: &Path, set: &ConfigSet) -> Result<()> {
    debug!(path = %path.display(), entries = set.len(), "writing configuration");

    let write_failed = |source: std::io::Error| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(set.to_env_string().as_bytes())
        .map_err(write_failed)?;
    file.as_file().sync_all().map_err(write_failed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o600))
            .map_err(write_failed)?;
    }

    file.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}
