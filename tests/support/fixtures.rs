//! Test fixtures and constants.

/// A valid SMTP secret bundle.
pub const SMTP_BUNDLE: &str = r#"{
    "host": "smtp.example.org",
    "port": 465,
    "user": "mailer",
    "password": "relay-password",
    "sender": "n8n@example.org",
    "ssl": true
}"#;

/// A bundle missing its `password` field.
pub const BUNDLE_WITHOUT_PASSWORD: &str = r#"{
    "host": "smtp.example.org",
    "port": 465,
    "user": "mailer",
    "sender": "n8n@example.org",
    "ssl": true
}"#;

/// Every key a resolved configuration contains, in write order.
pub const RESOLVED_KEYS: &[&str] = &[
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DB",
    "POSTGRES_NON_ROOT_USER",
    "POSTGRES_NON_ROOT_PASSWORD",
    "ENCRYPTION_KEY",
    "WEBHOOK_URL",
    "N8N_HOST",
    "N8N_PORT",
    "N8N_PROTOCOL",
    "N8N_SECURE_COOKIE",
    "OGNA_USER",
    "OGNA_HOST",
    "OGNA_PROTOCOL",
    "N8N_EMAIL_MODE",
    "N8N_SMTP_HOST",
    "N8N_SMTP_PORT",
    "N8N_SMTP_USER",
    "N8N_SMTP_PASS",
    "N8N_SMTP_SENDER",
    "N8N_SMTP_SSL",
];

/// Keys holding generated credentials.
pub const CREDENTIAL_KEYS: &[&str] = &[
    "POSTGRES_PASSWORD",
    "POSTGRES_NON_ROOT_PASSWORD",
    "ENCRYPTION_KEY",
];
