//! Constants used throughout bullpen.
//!
//! Centralizes file names, defaults, and the fixed key names the proxy
//! template binds to.

/// Settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = "bullpen.toml";

/// Generated environment file.
pub const ENV_FILE: &str = ".env";

/// Compose file owned by this project.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Compose project shared by both service groups.
pub const PROJECT_NAME: &str = "localai";

/// Reverse-proxy template and its rendered output.
pub const PROXY_TEMPLATE: &str = "nginx/nginx.conf.j2";
pub const PROXY_OUTPUT: &str = "nginx/nginx.conf";

/// External service definition repository.
pub const EXTERNAL_REPO_URL: &str = "https://github.com/supabase/supabase.git";
pub const EXTERNAL_DIR: &str = "supabase";
pub const EXTERNAL_SCOPE: &str = "docker";
pub const EXTERNAL_BRANCH: &str = "master";

/// Default hostnames offered at the prompts.
pub const DEFAULT_N8N_HOST: &str = "n8n.local.mydomain.com";
pub const DEFAULT_SUPABASE_HOST: &str = "supabase.local.mydomain.com";
pub const DEFAULT_QDRANT_HOST: &str = "qdrant.local.mydomain.com";

/// Hostname map keys, one per proxied subsystem.
pub const N8N_HOSTNAME: &str = "N8N_HOSTNAME";
pub const SUPABASE_HOSTNAME: &str = "SUPABASE_HOSTNAME";
pub const QDRANT_HOSTNAME: &str = "QDRANT_HOSTNAME";

/// Default password length for generated credentials.
pub const PASSWORD_LENGTH: usize = 20;

/// Random bytes behind each 32-character hex key.
pub const HEX_KEY_BYTES: usize = 16;

/// Length of the random string fed to the content hash.
pub const HASH_INPUT_LENGTH: usize = 32;

/// Characters a generated password may contain.
pub const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!-_";
