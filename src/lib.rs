//! Bullpen - generate secrets and bring up a self-hosted service stack.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Generate .env and the proxy config
//! │   ├── render        # Re-render the proxy config from .env
//! │   ├── up            # Sync and start every service
//! │   ├── interrupt     # SIGINT while prompting on piped input
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # bullpen.toml settings
//!     ├── secret        # Password, hex token and content hash generation
//!     ├── document      # Append-only .env document
//!     ├── generator     # Per-subsystem .env sections
//!     ├── hosts         # Hostname map for the proxy template
//!     ├── prompt        # Ask-with-default input
//!     ├── render        # Strict template rendering
//!     ├── env           # Reading .env back
//!     ├── exec          # Runner trait for git and docker
//!     ├── repo          # Sparse clone / pull of the external definition
//!     └── deploy        # Ordered teardown and start-up
//! ```

pub mod cli;
pub mod core;
pub mod error;

