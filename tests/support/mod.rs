//! Test support utilities for dockhand integration tests.
//!
//! Provides an isolated project directory with a secret bundle, a volume root
//! and a stub compose command that records its arguments instead of talking
//! to docker.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated: child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary project directory (the launcher's working directory)
    pub dir: TempDir,
}

impl Test {
    /// Create a project with a valid secret bundle and a succeeding compose stub.
    pub fn new() -> Self {
        let t = Self::bare();
        t.write_bundle(SMTP_BUNDLE);
        t
    }

    /// Create a project without a secret bundle.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let t = Self { dir };

        fs::create_dir_all(t.secrets_dir()).expect("failed to create secrets dir");
        t.write_compose_stub(0);
        t.write_settings();
        t
    }

    /// Path of the configuration store.
    pub fn env_path(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    /// Directory holding the secret bundle.
    pub fn secrets_dir(&self) -> PathBuf {
        self.dir.path().join("secrets")
    }

    /// Path of the secret bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.secrets_dir().join("smtp.json")
    }

    /// Root under which volume directories are created.
    pub fn volume_root(&self) -> PathBuf {
        self.dir.path().join("volumes")
    }

    /// File the compose stub appends its arguments to.
    pub fn compose_log(&self) -> PathBuf {
        self.dir.path().join("compose.log")
    }

    /// Write the secret bundle.
    pub fn write_bundle(&self, contents: &str) {
        fs::write(self.bundle_path(), contents).expect("failed to write bundle");
    }

    /// Remove the secret bundle.
    pub fn remove_bundle(&self) {
        fs::remove_file(self.bundle_path()).expect("failed to remove bundle");
    }

    /// Replace the compose stub with one exiting with `code`.
    ///
    /// The stub runs through `sh`, so it never needs the executable bit.
    pub fn write_compose_stub(&self, code: i32) {
        let script = format!(
            "printf '%s\\n' \"$*\" >> '{}'\nexit {}\n",
            self.compose_log().display(),
            code
        );
        fs::write(self.dir.path().join("compose.sh"), script).expect("failed to write stub");
    }

    /// Write `dockhand.toml` pointing every path into the project directory.
    pub fn write_settings(&self) {
        let settings = format!(
            "secrets_file = '{}'\nvolume_root = '{}'\ncompose = ['sh', '{}']\n",
            self.bundle_path().display(),
            self.volume_root().display(),
            self.dir.path().join("compose.sh").display(),
        );
        fs::write(self.dir.path().join("dockhand.toml"), settings)
            .expect("failed to write settings");
    }

    /// Current `.env` content.
    pub fn env_contents(&self) -> String {
        fs::read_to_string(self.env_path()).expect("failed to read .env")
    }

    /// Value of `key` in the current `.env`.
    pub fn env_value(&self, key: &str) -> Option<String> {
        let prefix = format!("{}=", key);
        self.env_contents()
            .lines()
            .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    /// Compose invocations recorded by the stub, one per line.
    pub fn compose_calls(&self) -> Vec<String> {
        fs::read_to_string(self.compose_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
