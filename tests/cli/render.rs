//! Tests for `bullpen render` command.

use crate::support::*;

#[test]
fn test_render_from_existing_env() {
    let t = Test::project();
    t.write(
        ".env",
        "N8N_HOST=\"wf.local\"\nSUPABASE_PUBLIC_URL=https://db.local\nQDRANT_PUBLIC_URL=https://vec.local/\n",
    );

    let output = t.render();
    assert_success(&output);

    let proxy = t.read("nginx/nginx.conf");
    assert!(proxy.contains("server_name wf.local;"));
    assert!(proxy.contains("server_name db.local;"));
    assert!(proxy.contains("server_name vec.local;"));
}

#[test]
fn test_render_after_hand_edit() {
    let t = Test::project();
    assert_success(&t.init_defaults());

    let env = t.read(".env").replace(
        "QDRANT_PUBLIC_URL=https://svc-c.local",
        "QDRANT_PUBLIC_URL=https://vectors.example.com",
    );
    t.write(".env", &env);

    assert_success(&t.render());
    assert!(t.read("nginx/nginx.conf").contains("server_name vectors.example.com;"));
}

#[test]
fn test_render_missing_host_fails_distinctly() {
    let t = Test::project();
    t.write(".env", "N8N_HOST=\"wf.local\"\n");

    let output = t.render();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to render");
    assert_stderr_contains(&output, "SUPABASE_HOSTNAME");
    assert!(!t.path("nginx/nginx.conf").exists());
}

#[test]
fn test_render_without_env_hints_init() {
    let t = Test::project();

    let output = t.render();
    assert_failure(&output);
    assert_stderr_contains(&output, ".env does not exist");
    assert_stdout_contains(&output, "bullpen init");
}
