//! SMTP secret bundle loading.
//!
//! The bundle lives outside the project, on the host's secrets volume. It is
//! read once per invocation and never written.

use std::path::Path;

use tracing::debug;

use crate::core::domain::SecretBundle;
use crate::error::{Result, SecretError};

/// Load the SMTP secret bundle.
///
/// # Errors
///
/// Returns `SecretError::MissingFile` if nothing exists at `path`,
/// `SecretError::ReadFailed` if it cannot be read, and
/// `SecretError::Malformed` if it is not a JSON object carrying every field.
pub fn load_secret_bundle(path: &Path) -> Result<SecretBundle> {
    debug!(path = %path.display(), "loading secret bundle");

    if !path.exists() {
        return Err(SecretError::MissingFile(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SecretError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let bundle = SecretBundle::from_json(&contents).map_err(|e| SecretError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(host = %bundle.host, "secret bundle loaded");
    Ok(bundle)
}
