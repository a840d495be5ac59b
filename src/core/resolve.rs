//! Configuration resolution.
//!
//! Builds the proposed configuration for a run and merges it with what the
//! previous run persisted. A persisted value always wins: credentials written
//! once are reused by every later run, and only keys the `.env` file does not
//! have yet get fresh values.

use tracing::{debug, warn};

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{ConfigSet, Identity, SecretBundle};
use crate::core::generate::generate_secret;
use crate::core::types::ConfigKey;

/// Resolved configuration and where each key came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    set: ConfigSet,
    kept: Vec<ConfigKey>,
    proposed: Vec<ConfigKey>,
    dropped: Vec<ConfigKey>,
}

impl Resolution {
    /// The resolved configuration.
    pub fn set(&self) -> &ConfigSet {
        &self.set
    }

    /// Consume into the resolved configuration.
    pub fn into_set(self) -> ConfigSet {
        self.set
    }

    /// Keys whose persisted value was kept.
    pub fn kept(&self) -> &[ConfigKey] {
        &self.kept
    }

    /// Keys the persisted set lacked, now holding their proposed value.
    pub fn proposed(&self) -> &[ConfigKey] {
        &self.proposed
    }

    /// Persisted keys that are no longer part of the configuration.
    pub fn dropped(&self) -> &[ConfigKey] {
        &self.dropped
    }
}

/// Merge a proposed configuration with a persisted one.
///
/// The result has exactly the keys of `proposed`, in its order. A key present
/// in `persisted` takes the persisted value; persisted keys unknown to
/// `proposed` are dropped.
pub fn merge(proposed: ConfigSet, persisted: &ConfigSet) -> Resolution {
    let mut resolution = Resolution::default();

    for (key, value) in proposed.entries() {
        match persisted.get(key) {
            Some(existing) => {
                resolution.set.insert(key.as_str(), existing);
                resolution.kept.push(key.clone());
            }
            None => {
                resolution.set.insert(key.as_str(), value.as_str());
                resolution.proposed.push(key.clone());
            }
        }
    }

    resolution.dropped = persisted
        .keys()
        .filter(|key| !proposed.contains_key(key))
        .map(str::to_string)
        .collect();

    for key in &resolution.dropped {
        warn!(key = %key, "dropping stale configuration key");
    }

    resolution
}

/// Builds configuration for one project.
#[derive(Debug, Clone)]
pub struct Resolver {
    project: String,
    secret_length: usize,
}

impl Resolver {
    /// Create a resolver for a project
    pub fn new(project: impl Into<String>, secret_length: usize) -> Self {
        Self {
            project: project.into(),
            secret_length,
        }
    }

    /// Create a resolver from launcher settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.project.clone(), settings.secret_length)
    }

    /// Build the proposed configuration.
    ///
    /// Every credential is freshly generated; [`Resolver::resolve`] decides
    /// whether it is used.
    pub fn proposed(&self, identity: &Identity, bundle: &SecretBundle) -> ConfigSet {
        let secret = || generate_secret(self.secret_length);

        let mut set = ConfigSet::new();

        set.insert("POSTGRES_USER", constants::POSTGRES_USER);
        set.insert("POSTGRES_PASSWORD", secret());
        set.insert("POSTGRES_DB", constants::POSTGRES_DB);
        set.insert("POSTGRES_NON_ROOT_USER", constants::POSTGRES_NON_ROOT_USER);
        set.insert("POSTGRES_NON_ROOT_PASSWORD", secret());
        set.insert("ENCRYPTION_KEY", secret());

        set.insert("WEBHOOK_URL", identity.public_url(&self.project));
        set.insert("N8N_HOST", identity.app_host(&self.project));
        set.insert("N8N_PORT", constants::N8N_PORT);
        set.insert("N8N_PROTOCOL", constants::N8N_PROTOCOL);
        set.insert("N8N_SECURE_COOKIE", constants::N8N_SECURE_COOKIE);
        set.insert("OGNA_USER", identity.user());
        set.insert("OGNA_HOST", identity.host());
        set.insert("OGNA_PROTOCOL", identity.protocol());

        set.insert("N8N_EMAIL_MODE", constants::N8N_EMAIL_MODE);
        set.insert("N8N_SMTP_HOST", bundle.host.to_string());
        set.insert("N8N_SMTP_PORT", bundle.port.to_string());
        set.insert("N8N_SMTP_USER", bundle.user.to_string());
        set.insert("N8N_SMTP_PASS", bundle.password.to_string());
        set.insert("N8N_SMTP_SENDER", bundle.sender.to_string());
        set.insert("N8N_SMTP_SSL", bundle.ssl.to_flag());

        debug!(entries = set.len(), "proposed configuration built");
        set
    }

    /// Resolve the configuration for a run, reporting where each key came from.
    pub fn resolve_detailed(
        &self,
        identity: &Identity,
        bundle: &SecretBundle,
        persisted: &ConfigSet,
    ) -> Resolution {
        let resolution = merge(self.proposed(identity, bundle), persisted);

        debug!(
            kept = resolution.kept.len(),
            proposed = resolution.proposed.len(),
            dropped = resolution.dropped.len(),
            "configuration resolved"
        );

        resolution
    }

    /// Resolve the configuration for a run.
    pub fn resolve(
        &self,
        identity: &Identity,
        bundle: &SecretBundle,
        persisted: &ConfigSet,
    ) -> ConfigSet {
        self.resolve_detailed(identity, bundle, persisted).into_set()
    }
}
