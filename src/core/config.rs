//! Launcher settings.
//!
//! Handles reading and validating the optional `dockhand.toml` settings file.
//! Every field has a default, so a deployment without a settings file behaves
//! like the stock n8n stack; command-line flags override both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::ProjectName;
use crate::error::{ConfigError, Result};

/// Paths, names and commands the launcher works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Compose project name; also the first label of the app host.
    pub project: ProjectName,
    /// Configuration store written on every run.
    pub env_file: PathBuf,
    /// SMTP secret bundle.
    pub secrets_file: PathBuf,
    /// Root of the per-project volume directories.
    pub volume_root: PathBuf,
    /// Volume directory names created under `{volume_root}/{project}`.
    pub volumes: Vec<String>,
    /// Compose command prefix, e.g. `["docker", "compose"]`.
    pub compose: Vec<String>,
    /// Length of generated credentials.
    pub secret_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project: constants::PROJECT_NAME.to_string(),
            env_file: PathBuf::from(constants::ENV_FILE),
            secrets_file: PathBuf::from(constants::SECRETS_FILE),
            volume_root: PathBuf::from(constants::VOLUME_ROOT),
            volumes: constants::VOLUMES.iter().map(|v| v.to_string()).collect(),
            compose: constants::COMPOSE_COMMAND
                .iter()
                .map(|c| c.to_string())
                .collect(),
            secret_length: constants::DEFAULT_SECRET_LENGTH,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or from `dockhand.toml` if present
    ///
    /// An explicit path must exist; the implicit one falls back to defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let implicit = Path::new(constants::SETTINGS_FILE);
                if implicit.exists() {
                    Self::load(implicit)
                } else {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the settings
    ///
    /// Checks:
    /// - Project name is non-empty and contains no whitespace or `/`
    /// - Compose command has a program
    /// - Volume names are single path components
    /// - Secret length is non-zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first failed check.
    pub fn validate(&self) -> Result<()> {
        if self.project.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "project",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self
            .project
            .chars()
            .any(|c| c.is_whitespace() || c == '/')
        {
            return Err(ConfigError::InvalidValue {
                field: "project",
                reason: format!("'{}' contains whitespace or '/'", self.project),
            }
            .into());
        }

        if self.compose.first().map_or(true, |p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "compose",
                reason: "must name a program".to_string(),
            }
            .into());
        }

        for volume in &self.volumes {
            if volume.is_empty() || volume == "." || volume == ".." || volume.contains(['/', '\\']) {
                return Err(ConfigError::InvalidValue {
                    field: "volumes",
                    reason: format!("'{}' is not a single directory name", volume),
                }
                .into());
            }
        }

        if self.secret_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "secret_length",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Volume directories to create before the stack starts.
    pub fn volume_dirs(&self) -> Vec<PathBuf> {
        let base = self.volume_root.join(&self.project);
        self.volumes.iter().map(|v| base.join(v)).collect()
    }
}
