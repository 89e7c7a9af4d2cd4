//! Error reporting tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_template_is_reported_with_path() {
    let t = Test::new();
    t.write("bullpen.toml", TEST_SETTINGS);

    let output = t.init_defaults();
    assert_failure(&output);
    assert_stderr_contains(&output, "nginx.conf.j2 does not exist");
    // The env file is written before the proxy step
    assert!(t.path(".env").exists());
}

#[test]
fn test_malformed_settings_rejected() {
    let t = Test::project();
    t.write("bullpen.toml", "[project\nname =");

    let output = t.init_defaults();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_invalid_settings_name_field() {
    let t = Test::project();
    t.write("bullpen.toml", "[project]\nname = \"\"\n");

    let output = t.render();
    assert_failure(&output);
    assert_stderr_contains(&output, "project.name");
}

#[test]
fn test_unknown_command() {
    let t = Test::new();
    let output = t.cmd().arg("deploy-everything").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bullpen").and(predicate::str::contains("render")));
}

#[test]
fn test_completions_for_each_shell() {
    let t = Test::new();
    for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
        t.cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("bullpen"));
    }
}

#[test]
fn test_completions_unknown_shell_rejected() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tcsh"));
}
