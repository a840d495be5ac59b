//! Tests for fatal conditions and exit codes.

use crate::support::*;

#[test]
fn test_missing_bundle_fails_before_writing() {
    let t = Test::bare();

    let output = t.up();

    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "secret bundle not found");
    assert!(!t.env_path().exists());
    assert!(t.compose_calls().is_empty());
}

#[test]
fn test_missing_bundle_leaves_existing_env_untouched() {
    let t = Test::new();
    assert_success(&t.up());
    let before = t.env_contents();

    t.remove_bundle();
    let output = t.restart();

    assert_failure(&output);
    assert_eq!(t.env_contents(), before);
}

#[test]
fn test_malformed_bundle_fails() {
    let t = Test::bare();
    t.write_bundle("{ not json");

    let output = t.up();

    assert_failure(&output);
    assert_stderr_contains(&output, "malformed secret bundle");
    assert!(!t.env_path().exists());
}

#[test]
fn test_bundle_missing_field_fails() {
    let t = Test::bare();
    t.write_bundle(BUNDLE_WITHOUT_PASSWORD);

    let output = t.up();

    assert_failure(&output);
    assert_stderr_contains(&output, "password");
    assert!(!t.env_path().exists());
}

#[test]
fn test_unknown_action_still_writes_config() {
    let t = Test::new();

    let output = t.action("deploy");

    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "unknown action: deploy");
    assert_stderr_contains(&output, "up, down, restart");
    assert!(t.env_path().exists());
    assert!(t.compose_calls().is_empty());
}

#[test]
fn test_missing_action_fails_after_writing() {
    let t = Test::new();

    let output = t.run(&[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "no action given");
    assert!(t.env_path().exists());
}

#[test]
fn test_compose_failure_propagates_exit_code() {
    let t = Test::new();
    t.write_compose_stub(3);

    let output = t.up();

    assert_eq!(output.status.code(), Some(3));
    assert_stderr_contains(&output, "exit code 3");
    assert_eq!(t.compose_calls().len(), 1);
    assert!(t.env_path().exists());
}

#[test]
fn test_missing_docker_program() {
    let t = Test::new();

    let output = t.run(&["--action", "down", "--docker", "dockhand-missing-docker"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "compose program not found");
    assert_stdout_contains(&output, "--docker");
}

#[test]
fn test_explicit_missing_settings_file() {
    let t = Test::new();

    let output = t.run(&["--action", "up", "--config", "missing.toml"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "settings file not found");
    assert!(!t.env_path().exists());
}

#[test]
fn test_invalid_settings_file() {
    let t = Test::new();
    std::fs::write(t.dir.path().join("dockhand.toml"), "secret_length = 0\n").unwrap();

    let output = t.up();

    assert_failure(&output);
    assert_stderr_contains(&output, "secret_length");
}
