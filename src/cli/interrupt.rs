//! SIGINT handling for `init`.
//!
//! A terminal prompt sees Ctrl+C as input; piped stdin does not, so the
//! signal is caught here. While prompts are open nothing has been written
//! and the run exits 0. Outside that window it exits 130.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::cli::output;
use crate::error::{PromptError, Result};

static PROMPTING: AtomicBool = AtomicBool::new(false);

/// Exit status for a signal arriving outside the prompt window.
const SIGINT_STATUS: i32 = 130;

/// Install the process-wide handler. Call once per process.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        if PROMPTING.load(Ordering::SeqCst) {
            output::interrupted();
            std::process::exit(0);
        }
        std::process::exit(SIGINT_STATUS);
    })
    .map_err(|e| PromptError::Terminal(format!("cannot install interrupt handler: {}", e)))?;
    debug!("interrupt handler installed");
    Ok(())
}

/// Marks the prompt window for as long as it is alive.
#[derive(Debug)]
pub struct Prompting(());

impl Prompting {
    pub fn start() -> Self {
        PROMPTING.store(true, Ordering::SeqCst);
        Self(())
    }

    pub fn is_active() -> bool {
        PROMPTING.load(Ordering::SeqCst)
    }
}

impl Drop for Prompting {
    fn drop(&mut self) {
        PROMPTING.store(false, Ordering::SeqCst);
    }
}
