//! Tests for the resolve-write-dispatch flow.

use crate::support::*;

#[test]
fn test_first_run_generates_credentials() {
    let t = Test::new();
    assert!(!t.env_path().exists());

    let output = t.up();
    assert_success(&output);

    let contents = t.env_contents();
    assert_env_keys(&contents, RESOLVED_KEYS);

    for key in CREDENTIAL_KEYS {
        let value = t.env_value(key).unwrap();
        assert_eq!(value.len(), 100, "{} has wrong length", key);
        assert!(
            !value.contains(['O', '0', 'I', 'l', '1']),
            "{} contains an ambiguous character",
            key
        );
    }
}

#[test]
fn test_second_run_reuses_credentials() {
    let t = Test::new();

    assert_success(&t.up());
    let first = t.env_contents();

    assert_success(&t.up());
    let second = t.env_contents();

    assert_eq!(first, second);
}

#[test]
fn test_postgres_password_survives_restart() {
    let t = Test::new();

    assert_success(&t.up());
    let password = t.env_value("POSTGRES_PASSWORD").unwrap();

    assert_success(&t.restart());
    assert_eq!(t.env_value("POSTGRES_PASSWORD").unwrap(), password);
}

#[test]
fn test_restart_issues_one_recreate() {
    let t = Test::new();
    assert_success(&t.up());
    let before = t.compose_calls().len();

    let output = t.restart();
    assert_success(&output);

    let calls = t.compose_calls();
    assert_eq!(calls.len(), before + 1);
    assert_eq!(calls.last().unwrap(), "-p n8n up -d --force-recreate");
}

#[test]
fn test_up_provisions_volumes_and_starts_detached() {
    let t = Test::new();

    assert_success(&t.up());

    assert!(t.volume_root().join("n8n/redis").is_dir());
    assert!(t.volume_root().join("n8n/postgress").is_dir());
    assert_eq!(t.compose_calls(), vec!["-p n8n up -d"]);
}

#[test]
fn test_down_removes_volumes() {
    let t = Test::new();

    assert_success(&t.down());

    assert_eq!(t.compose_calls(), vec!["-p n8n down -v"]);
    assert!(!t.volume_root().exists());
}

#[test]
fn test_identity_flags_derive_hosts() {
    let t = Test::new();

    let output = t.run(&[
        "--action",
        "up",
        "--user",
        "alice",
        "--host",
        "example.org",
        "--protocol",
        "https",
    ]);
    assert_success(&output);

    assert_eq!(
        t.env_value("WEBHOOK_URL").as_deref(),
        Some("https://n8n.alice.example.org")
    );
    assert_eq!(
        t.env_value("N8N_HOST").as_deref(),
        Some("n8n.alice.example.org")
    );
    assert_eq!(t.env_value("OGNA_USER").as_deref(), Some("alice"));
    assert_eq!(t.env_value("N8N_PROTOCOL").as_deref(), Some("http"));
}

#[test]
fn test_defaults_identity() {
    let t = Test::new();

    assert_success(&t.up());

    assert_eq!(
        t.env_value("WEBHOOK_URL").as_deref(),
        Some("http://n8n.user.localhost")
    );
}

#[test]
fn test_bundle_fields_are_written() {
    let t = Test::new();

    assert_success(&t.up());

    assert_eq!(t.env_value("N8N_SMTP_HOST").as_deref(), Some("smtp.example.org"));
    assert_eq!(t.env_value("N8N_SMTP_PORT").as_deref(), Some("465"));
    assert_eq!(t.env_value("N8N_SMTP_PASS").as_deref(), Some("relay-password"));
    assert_eq!(t.env_value("N8N_SMTP_SSL").as_deref(), Some("true"));
}

#[test]
fn test_persisted_values_override_new_bundle() {
    let t = Test::new();
    assert_success(&t.up());

    t.write_bundle(&SMTP_BUNDLE.replace("smtp.example.org", "relay.example.net"));
    assert_success(&t.up());

    assert_eq!(t.env_value("N8N_SMTP_HOST").as_deref(), Some("smtp.example.org"));
}

#[test]
fn test_stale_keys_are_dropped_and_missing_keys_added() {
    let t = Test::new();
    std::fs::write(
        t.env_path(),
        "# old deployment\nLEGACY_TOKEN=abc\nPOSTGRES_PASSWORD='kept-from-before'\n",
    )
    .unwrap();

    let output = t.up();
    assert_success(&output);
    assert_stdout_contains(&output, "LEGACY_TOKEN");

    let contents = t.env_contents();
    assert_env_keys(&contents, RESOLVED_KEYS);
    assert_eq!(
        t.env_value("POSTGRES_PASSWORD").as_deref(),
        Some("kept-from-before")
    );
    assert!(!contents.contains("LEGACY_TOKEN"));
    assert!(!contents.contains('#'));
}

#[test]
fn test_dry_run_writes_config_without_compose() {
    let t = Test::new();

    let output = t.run(&["--action", "restart", "--dry-run"]);
    assert_success(&output);

    assert!(t.env_path().exists());
    assert!(t.compose_calls().is_empty());
    assert_stdout_contains(&output, "up -d --force-recreate");
}

#[test]
fn test_project_override() {
    let t = Test::new();

    let output = t.run(&["--action", "up", "--project", "flows"]);
    assert_success(&output);

    assert_eq!(t.compose_calls(), vec!["-p flows up -d"]);
    assert_eq!(
        t.env_value("N8N_HOST").as_deref(),
        Some("flows.user.localhost")
    );
    assert!(t.volume_root().join("flows/redis").is_dir());
}

#[test]
fn test_env_file_override() {
    let t = Test::new();

    let output = t.run(&["--action", "up", "--env-file", "deploy.env"]);
    assert_success(&output);

    assert!(t.dir.path().join("deploy.env").exists());
    assert!(!t.env_path().exists());
}

#[cfg(unix)]
#[test]
fn test_env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.up());

    let mode = std::fs::metadata(t.env_path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
