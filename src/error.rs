//! Error types.
//!
//! Errors are grouped by the stage that raises them. Every stage error converts
//! into [`Error`], which is what library functions return.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::constants::VALID_ACTIONS;

/// Top-level error for every dockhand operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// A compose command that exited with a code hands that code through;
    /// everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lifecycle(LifecycleError::CommandFailed {
                code: Some(code), ..
            }) if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// SMTP secret bundle errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret bundle not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read secret bundle {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed secret bundle {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Configuration store (.env) errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Action parsing and orchestration errors.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("no action given (available actions: {})", VALID_ACTIONS.join(", "))]
    NoAction,

    #[error(
        "unknown action: {0} (available actions: {actions})",
        actions = VALID_ACTIONS.join(", ")
    )]
    UnrecognizedAction(String),

    #[error("compose program not found: {0}")]
    ProgramNotFound(String),

    #[error("failed to create volume directory {}: {source}", .path.display())]
    Provision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
