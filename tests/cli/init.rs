//! Tests for `bullpen init` command.

use crate::support::*;
use regex::Regex;
use std::collections::HashSet;

#[test]
fn test_init_with_defaults_writes_env_and_proxy() {
    let t = Test::project();

    let output = t.init_defaults();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote .env");
    assert_stdout_contains(&output, "wrote nginx/nginx.conf");

    let env = t.read(".env");
    assert!(env.contains("N8N_HOST=\"svc-a.local\"\n"));
    assert!(env.contains("WEBHOOK_URL=https://svc-a.local\n"));
    assert!(env.contains("SUPABASE_PUBLIC_URL=https://svc-b.local\n"));
    assert!(env.contains("QDRANT_PUBLIC_URL=https://svc-c.local\n"));

    let proxy = t.read("nginx/nginx.conf");
    assert!(proxy.contains("server_name svc-a.local;"));
    assert!(proxy.contains("server_name svc-b.local;"));
    assert!(proxy.contains("server_name svc-c.local;"));
    assert!(!proxy.contains("{{"), "leftover placeholder in:\n{}", proxy);
}

#[test]
fn test_init_credentials_are_distinct() {
    let t = Test::project();
    assert_success(&t.init_defaults());

    let env = parse_env(&t.read(".env"));
    let mut seen = HashSet::new();
    for key in CREDENTIAL_KEYS {
        let value = env
            .get(*key)
            .unwrap_or_else(|| panic!("{} missing from .env", key));
        assert!(seen.insert(value.clone()), "{} shares a value", key);
    }
}

#[test]
fn test_init_credential_shapes() {
    let t = Test::project();
    assert_success(&t.init_defaults());
    let env = parse_env(&t.read(".env"));

    let hex = Regex::new(r"^[0-9a-f]{32}$").unwrap();
    let password = Regex::new(r#"^"[A-Za-z0-9!_-]{20}"$"#).unwrap();
    let hash = Regex::new(r#"^"?[0-9a-f]{64}"?$"#).unwrap();

    assert!(hex.is_match(&env["N8N_ENCRYPTION_KEY"]), "{}", env["N8N_ENCRYPTION_KEY"]);
    assert!(hex.is_match(&env["VAULT_ENC_KEY"]));
    assert!(password.is_match(&env["DASHBOARD_PASSWORD"]), "{}", env["DASHBOARD_PASSWORD"]);
    assert!(password.is_match(&env["QDRANT__SERVICE__API_KEY"]));
    assert!(hash.is_match(&env["LOGFLARE_PUBLIC_ACCESS_TOKEN"]));
}

#[test]
fn test_init_twice_regenerates_secrets() {
    let t = Test::project();
    assert_success(&t.init_defaults());
    let first = parse_env(&t.read(".env"));

    let output = t.init_defaults();
    assert_success(&output);
    assert_stdout_contains(&output, "overwriting");
    let second = parse_env(&t.read(".env"));

    assert_ne!(first["N8N_ENCRYPTION_KEY"], second["N8N_ENCRYPTION_KEY"]);
    assert_eq!(first["N8N_HOST"], second["N8N_HOST"]);
}

#[test]
fn test_init_answers_override_defaults() {
    let t = Test::project();

    let output = t.init("https://flows.example.com/\n\n\n\n\n\n");
    assert_success(&output);

    let env = t.read(".env");
    assert!(env.contains("N8N_HOST=\"flows.example.com\""));
    assert!(t.read("nginx/nginx.conf").contains("server_name flows.example.com;"));
}

#[test]
fn test_interrupt_exits_zero_without_writing() {
    let t = Test::project();

    // Input ends after the first answer
    let output = t.init("\n");
    assert_success(&output);
    assert_stdout_contains(&output, "interrupted");
    assert!(!t.path(".env").exists());
    assert!(!t.path("nginx/nginx.conf").exists());
}

#[test]
fn test_interrupt_leaves_existing_env_untouched() {
    let t = Test::project();
    t.write(".env", "KEEP=1\n");

    let output = t.init("");
    assert_success(&output);
    assert_eq!(t.read(".env"), "KEEP=1\n");
}

#[test]
fn test_init_no_render_skips_proxy() {
    let t = Test::project();

    let output = t
        .cmd()
        .args(["init", "--no-render"])
        .write_stdin("\n".repeat(6))
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path(".env").exists());
    assert!(!t.path("nginx/nginx.conf").exists());
}

#[test]
fn test_init_in_other_directory() {
    let t = Test::project();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(elsewhere.path())
        .arg("--dir")
        .arg(t.dir.path())
        .arg("init")
        .write_stdin("\n".repeat(6))
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path(".env").exists());
    assert!(!elsewhere.path().join(".env").exists());
}

#[cfg(unix)]
#[test]
fn test_env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::project();
    assert_success(&t.init_defaults());

    let mode = std::fs::metadata(t.path(".env")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn test_sigint_while_waiting_on_piped_input_exits_zero() {
    use std::io::Read;
    use std::process::{Command, Stdio};
    use std::time::Duration;

    let t = Test::project();
    let mut child = Command::new(env!("CARGO_BIN_EXE_bullpen"))
        .arg("init")
        .current_dir(t.dir.path())
        .env("NO_COLOR", "1")
        .env_remove("BULLPEN_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Hold stdin open so the first prompt blocks
    let stdin = child.stdin.take();

    std::thread::sleep(Duration::from_millis(800));
    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    drop(stdin);
    let mut out = String::new();
    child.stdout.take().unwrap().read_to_string(&mut out).unwrap();

    assert_eq!(status.code(), Some(0), "stdout: {}", out);
    assert!(out.contains("interrupted"), "stdout: {}", out);
    assert!(!t.path(".env").exists());
    assert!(!t.path("nginx/nginx.conf").exists());
}
