//! ConfigSet type.
//!
//! An ordered set of configuration entries, as read from or written to `.env`.

use std::fmt;

use crate::core::types::{ConfigKey, ConfigValue};

/// Ordered key/value configuration.
///
/// Keys are unique; declaration order is kept for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSet {
    entries: Vec<(ConfigKey, ConfigValue)>,
}

impl ConfigSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.env` text
    ///
    /// Skips blank lines, comments and lines without `=`. Each remaining line
    /// is split on its first `=`; the value is trimmed and loses one matching
    /// pair of surrounding quotes. A repeated key keeps its last value.
    pub fn parse(contents: &str) -> Self {
        let mut set = Self::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                set.insert(key.trim(), strip_quotes(value.trim()));
            }
        }

        set
    }

    /// Insert or replace a value
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<ConfigKey>, value: impl Into<ConfigValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(ConfigKey, ConfigValue)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to `.env` text
    ///
    /// Writes `KEY=VALUE` lines verbatim. Values are never quoted or escaped,
    /// so a value with surrounding quotes or whitespace will not survive a
    /// round trip through [`ConfigSet::parse`].
    pub fn to_env_string(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push('\n');
        }

        output
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigSet
where
    K: Into<ConfigKey>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl fmt::Display for ConfigSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_env_string())
    }
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }

    raw
}
