//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A configuration key (e.g., POSTGRES_PASSWORD, N8N_HOST).
///
/// Case-sensitive and unique within a [`ConfigSet`](crate::core::domain::ConfigSet).
pub type ConfigKey = String;

/// A configuration value.
///
/// Opaque to the resolver: secrets, host names, ports and booleans are all
/// carried as plain strings.
pub type ConfigValue = String;

/// A compose project name (`docker compose -p <project>`).
pub type ProjectName = String;
