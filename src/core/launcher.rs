//! Launcher.
//!
//! The primary interface for a deployment action: resolve and persist the
//! configuration, then hand the action to the orchestrator.

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::domain::Identity;
use crate::core::env::{read_persisted, write_persisted};
use crate::core::lifecycle::{dispatch, Action, Orchestrator};
use crate::core::resolve::{Resolution, Resolver};
use crate::core::secrets::load_secret_bundle;
use crate::error::Result;

/// Runs one deployment action.
///
/// Owns the settings and the orchestrator; holds no state between runs.
#[derive(Debug)]
pub struct Launcher<O> {
    settings: Settings,
    orchestrator: O,
}

impl<O: Orchestrator> Launcher<O> {
    /// Create a launcher.
    pub fn new(settings: Settings, orchestrator: O) -> Self {
        Self {
            settings,
            orchestrator,
        }
    }

    /// Get settings reference.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the orchestrator.
    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    /// Resolve the configuration and write it to the store.
    ///
    /// Reads the persisted set, loads the secret bundle, resolves and writes.
    ///
    /// # Errors
    ///
    /// Returns a `SecretError` if the bundle is missing or malformed, in which
    /// case the store is not touched, or a `StoreError` if reading or writing
    /// the store fails.
    pub fn configure(&self, identity: &Identity) -> Result<Resolution> {
        let persisted = read_persisted(&self.settings.env_file)?;
        let bundle = load_secret_bundle(&self.settings.secrets_file)?;

        let resolution =
            Resolver::from_settings(&self.settings).resolve_detailed(identity, &bundle, &persisted);

        write_persisted(&self.settings.env_file, resolution.set())?;
        info!(
            path = %self.settings.env_file.display(),
            entries = resolution.set().len(),
            "configuration written"
        );

        Ok(resolution)
    }

    /// Parse `action` and run it.
    ///
    /// # Errors
    ///
    /// Returns a `LifecycleError` if the action is missing or unknown, or if
    /// the orchestrator fails.
    pub fn dispatch(&self, action: Option<&str>) -> Result<Action> {
        let action = Action::parse(action)?;
        dispatch(action, &self.orchestrator)?;
        debug!(action = %action, "action finished");
        Ok(action)
    }

    /// Configure, then dispatch.
    ///
    /// The configuration is written before the action name is checked, so an
    /// unknown action still leaves an up-to-date store behind.
    pub fn run(&self, identity: &Identity, action: Option<&str>) -> Result<Resolution> {
        let resolution = self.configure(identity)?;
        self.dispatch(action)?;
        Ok(resolution)
    }
}
