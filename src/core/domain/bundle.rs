//! SecretBundle type.
//!
//! SMTP relay credentials supplied by the host, read from a JSON document.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroize;

/// A scalar JSON field.
///
/// The bundle is written by hand or by other tooling, so a port may arrive as
/// `587` or `"587"` and a flag as `true`, `1` or `"TRUE"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Whether the value reads as true.
    ///
    /// `true`, the number 1 (`1` or `1.0`), `"1"` and any casing of `"true"`
    /// are truthy; everything else is not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => n.as_f64() == Some(1.0),
            Scalar::Text(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        }
    }

    /// Canonical `"true"` / `"false"` spelling of [`Scalar::is_truthy`].
    pub fn to_flag(&self) -> &'static str {
        if self.is_truthy() {
            "true"
        } else {
            "false"
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// Mail relay credentials.
///
/// Every field is required. The password is wiped from memory on drop and
/// never printed by `Debug`.
#[derive(Clone, Deserialize)]
pub struct SecretBundle {
    pub host: Scalar,
    pub port: Scalar,
    pub user: Scalar,
    pub password: Scalar,
    pub sender: Scalar,
    pub ssl: Scalar,
}

impl SecretBundle {
    /// Parse a bundle from JSON text
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBundle")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .field("ssl", &self.ssl)
            .finish()
    }
}

impl Drop for SecretBundle {
    fn drop(&mut self) {
        if let Scalar::Text(password) = &mut self.password {
            password.zeroize();
        }
    }
}
