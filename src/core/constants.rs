//! Constants used throughout dockhand.
//!
//! Centralizes default paths, names and the literal values of the n8n stack.
//! Everything a deployment may want to change is also a field of
//! [`Settings`](crate::core::config::Settings); these are only the defaults.

/// Default compose project name.
pub const PROJECT_NAME: &str = "n8n";

/// Configuration store file name (.env), relative to the working directory.
pub const ENV_FILE: &str = ".env";

/// Settings file looked up in the working directory when `--config` is absent.
pub const SETTINGS_FILE: &str = "dockhand.toml";

/// SMTP secret bundle, owned by whoever provisions the host.
pub const SECRETS_FILE: &str = "/mnt/volume-db/secrets/smtp.json";

/// Root under which per-project volume directories are created.
pub const VOLUME_ROOT: &str = "/mnt/volume-db";

/// Volume directories the compose file mounts (`{VOLUME_ROOT}/{project}/{name}`).
pub const VOLUMES: &[&str] = &["redis", "postgress"];

/// Compose command prefix.
pub const COMPOSE_COMMAND: &[&str] = &["docker", "compose"];

/// Length of every generated credential.
pub const DEFAULT_SECRET_LENGTH: usize = 100;

/// Characters excluded from generated secrets because they are easy to misread.
pub const AMBIGUOUS_CHARS: &[char] = &['O', '0', 'I', 'l', '1'];

/// Actions accepted by `--action`.
pub const VALID_ACTIONS: &[&str] = &["up", "down", "restart"];

/// Identity defaults.
pub const DEFAULT_USER: &str = "user";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PROTOCOL: &str = "http";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DOCKHAND_LOG";

/// Environment variable selecting the log format (`json` for one JSON object per event).
pub const LOG_FORMAT_ENV: &str = "DOCKHAND_LOG_FORMAT";

// Literal values of the n8n stack.
pub const POSTGRES_USER: &str = "n8n_postgres_users";
pub const POSTGRES_DB: &str = "postgres";
pub const POSTGRES_NON_ROOT_USER: &str = "n8n_db_user";
pub const N8N_PORT: &str = "5678";
pub const N8N_PROTOCOL: &str = "http";
pub const N8N_SECURE_COOKIE: &str = "false";
pub const N8N_EMAIL_MODE: &str = "smtp";
