//! Tests for the `configure` command.

use crate::support::*;

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_configure_dry_run_global() {
    let t = Test::new();

    let output = t.configure(&["--global", "--dry-run"]);
    assert_success(&output);
    assert_protocol(
        &output,
        "git config --global --replace-all credential.helper gopass\n",
    );
}

#[test]
fn test_configure_dry_run_with_store() {
    let t = Test::new();

    let output = t.configure(&["--system", "--store=work", "--dry-run"]);
    assert_success(&output);
    assert_stdout_contains(
        &output,
        "git config --system --replace-all credential.helper \"gopass --store=work\"",
    );
}

#[test]
fn test_configure_scopes_are_exclusive() {
    let t = Test::new();

    let output = t.configure(&["--global", "--local", "--dry-run"]);
    assert_failure(&output);
}

#[test]
fn test_configure_rejects_store_with_spaces() {
    let t = Test::new();

    let output = t.configure(&["--global", "--store", "my store", "--dry-run"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "whitespace");
}

#[test]
fn test_configure_global_writes_gitconfig() {
    let t = Test::new();
    if !git_available() {
        eprintln!("SKIPPED: git not installed");
        return;
    }

    let output = t
        .cmd()
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_CONFIG_GLOBAL")
        .args(["configure", "--global", "--store=work"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "credential.helper set to");

    let gitconfig = std::fs::read_to_string(t.home.path().join(".gitconfig")).unwrap();
    assert!(
        gitconfig.contains("helper = gopass --store=work"),
        "unexpected .gitconfig: {}",
        gitconfig
    );
}

#[test]
fn test_configure_replaces_existing_helper() {
    let t = Test::new();
    if !git_available() {
        eprintln!("SKIPPED: git not installed");
        return;
    }
    std::fs::write(
        t.home.path().join(".gitconfig"),
        "[credential]\n\thelper = cache\n\thelper = store\n",
    )
    .unwrap();

    let output = t
        .cmd()
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_CONFIG_GLOBAL")
        .args(["configure", "--global"])
        .output()
        .unwrap();
    assert_success(&output);

    let gitconfig = std::fs::read_to_string(t.home.path().join(".gitconfig")).unwrap();
    assert!(!gitconfig.contains("cache"), "unexpected .gitconfig: {}", gitconfig);
    assert!(gitconfig.contains("helper = gopass"));
}
