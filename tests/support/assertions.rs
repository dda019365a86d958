//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout is exactly the given protocol text.
pub fn assert_protocol(output: &Output, expected: &str) {
    assert_eq!(stdout(output), expected, "unexpected protocol output");
}

/// Assert stdout carries no password line.
pub fn assert_no_password(output: &Output) {
    let out = stdout(output);
    assert!(
        !out.lines().any(|l| l.starts_with("password=")),
        "stdout should not contain a password, got: {}",
        out
    );
}

/// Assert store/get roundtrip works for a request and password.
pub fn assert_roundtrip(t: &super::Test, request: &str, password: &str) {
    let output = t.store(&format!("{}password={}\n\n", request, password));
    assert_success(&output);

    let output = t.get(&format!("{}\n", request));
    assert_success(&output);
    assert_stdout_contains(&output, &format!("password={}\n", password));
}
