//! Tests for the `store` verb.

use crate::support::*;

#[test]
fn test_store_writes_entry() {
    let t = Test::new();

    let output = t.store(STORE_ALICE);
    assert_success(&output);
    assert!(stdout(&output).is_empty(), "store must not write to stdout");
    assert_eq!(t.read_entry(ALICE_PATH), "s3cr3t\nlogin: alice\n");
}

#[test]
fn test_store_then_get() {
    let t = Test::new();
    assert_roundtrip(
        &t,
        "protocol=https\nhost=example.com\nusername=alice\n",
        "s3cr3t",
    );
}

#[test]
fn test_store_overwrites() {
    let t = Test::new();

    assert_success(&t.store(STORE_ALICE));
    assert_success(&t.store(
        "protocol=https\nhost=example.com\nusername=alice\npassword=rotated\n\n",
    ));

    let output = t.get(GET_ALICE);
    assert_success(&output);
    assert_stdout_contains(&output, "password=rotated\n");
}

#[test]
fn test_store_without_username_uses_host_entry() {
    let t = Test::new();

    assert_success(&t.store("protocol=https\nhost=example.com\npassword=pw\n\n"));
    assert_eq!(t.read_entry("git/example.com"), "pw\n");
}

#[test]
fn test_store_preserves_password_whitespace() {
    let t = Test::new();
    assert_roundtrip(
        &t,
        "protocol=https\nhost=example.com\nusername=alice\n",
        "  padded = pass  ",
    );
}

#[test]
fn test_store_unicode_password() {
    let t = Test::new();
    assert_roundtrip(
        &t,
        "protocol=https\nhost=example.com\nusername=alice\n",
        "пароль🔑秘密",
    );
}

#[test]
fn test_store_missing_password_fails() {
    let t = Test::new();

    let output = t.store("protocol=https\nhost=example.com\n\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "no password");
    assert!(!t.has_entry("git/example.com"));
}

#[test]
fn test_store_missing_host_fails() {
    let t = Test::new();

    let output = t.store("protocol=https\npassword=pw\n\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "no host");
}

#[test]
fn test_store_by_url_then_get_by_fields() {
    let t = Test::new();

    assert_success(&t.store("url=https://alice%40corp@example.com/\npassword=s3cr3t\n\n"));
    assert!(t.has_entry("git/example.com/alice@corp"));

    let output = t.get("protocol=https\nhost=example.com\nusername=alice@corp\n\n");
    assert_success(&output);
    assert_stdout_contains(&output, "password=s3cr3t\n");
}
