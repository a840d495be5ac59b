//! Identity type.
//!
//! The operator-supplied parameters a deployment's public address derives from.

use crate::core::constants;

/// Who and where a stack is deployed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: String,
    host: String,
    protocol: String,
}

impl Identity {
    /// Create an identity from its parts
    pub fn new(user: impl Into<String>, host: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            protocol: protocol.into(),
        }
    }

    /// Deploying user
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Base host name
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Public URL scheme
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Bare host the app is served on: `{project}.{user}.{host}`
    pub fn app_host(&self, project: &str) -> String {
        format!("{}.{}.{}", project, self.user, self.host)
    }

    /// Public URL of the app: `{protocol}://{project}.{user}.{host}`
    pub fn public_url(&self, project: &str) -> String {
        format!("{}://{}", self.protocol, self.app_host(project))
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_USER,
            constants::DEFAULT_HOST,
            constants::DEFAULT_PROTOCOL,
        )
    }
}
