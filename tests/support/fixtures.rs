//! Test fixtures and constants.

/// The shipped reverse-proxy template.
pub const PROXY_TEMPLATE: &str = include_str!("../../nginx/nginx.conf.j2");

/// Settings pointing every prompt default at a test hostname.
pub const TEST_SETTINGS: &str = r#"
[defaults]
n8n_host = "svc-a.local"
supabase_host = "svc-b.local"
qdrant_host = "svc-c.local"
"#;

/// Credential fields that must all hold distinct values.
pub const CREDENTIAL_KEYS: &[&str] = &[
    "N8N_POSTGRES_PASSWORD",
    "N8N_POSTGRES_NON_ROOT_PASSWORD",
    "N8N_ENCRYPTION_KEY",
    "N8N_RUNNERS_AUTH_TOKEN",
    "DASHBOARD_PASSWORD",
    "SECRET_KEY_BASE",
    "VAULT_ENC_KEY",
    "POSTGRES_PASSWORD",
    "LOGFLARE_PUBLIC_ACCESS_TOKEN",
    "LOGFLARE_PRIVATE_ACCESS_TOKEN",
    "QDRANT__SERVICE__API_KEY",
];

/// Prompts asked by a full `init` run.
pub const PROMPT_COUNT: usize = 6;
