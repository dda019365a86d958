//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_configure() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("configure"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-credential-gopass"));
}

#[test]
fn test_malformed_input_fails_without_echo() {
    let t = Test::new();

    let output = t.get("host=example.com\nhunter2\n\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "line 2");
    assert!(!stderr(&output).contains("hunter2"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_get_without_host_fails() {
    let t = Test::new();

    let output = t.get("protocol=https\n\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "no host");
}

#[test]
fn test_backend_failure_is_reported() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("FAKE_GOPASS_FAIL", "1")
        .arg("get")
        .write_stdin(GET_ALICE)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_gopass_binary() {
    let t = Test::new();

    let output = t
        .verb_with(&["--gopass-bin", "/nonexistent/gopass"], "get", GET_ALICE);
    assert_failure(&output);
    assert_stderr_contains(&output, "unavailable");
    assert_stderr_contains(&output, "--gopass-bin");
}

#[test]
fn test_timeout_kills_hung_backend() {
    let t = Test::new();

    let started = std::time::Instant::now();
    let output = t
        .cmd()
        .env("FAKE_GOPASS_HANG", "1")
        .args(["--timeout", "1", "get"])
        .write_stdin(GET_ALICE)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "did not respond");
    assert!(started.elapsed() < std::time::Duration::from_secs(20));
}

#[test]
fn test_zero_timeout_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--timeout", "0", "get"])
        .write_stdin(GET_ALICE)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_invalid_config_file_fails() {
    let t = Test::new();
    let config = t.home.path().join("custom.toml");
    std::fs::write(&config, "store = [not valid").unwrap();

    let output = t
        .cmd()
        .env("GIT_CREDENTIAL_GOPASS_CONFIG", &config)
        .arg("get")
        .write_stdin(GET_ALICE)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::with_entries(&[(ALICE_PATH, "s3cr3t\n")]);

    let output = t.verb_with(&["--verbose"], "get", GET_ALICE);
    assert_success(&output);
    assert_stderr_contains(&output, "git/example.com/alice");
    assert!(!stderr(&output).contains("s3cr3t"));
    assert_protocol(
        &output,
        "protocol=https\nhost=example.com\nusername=alice\npassword=s3cr3t\n\n",
    );
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_entries(&[(ALICE_PATH, "s3cr3t\n")]);

    let output = t.get(GET_ALICE);
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("INFO"),
        "default mode should not log below warn, got: {}",
        err
    );
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("complete")
                .and(predicate::str::contains("git-credential-gopass")),
        );
}
