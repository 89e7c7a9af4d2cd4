//! Interactive input.
//!
//! A [`Prompt`] asks for a value with a default and either returns the
//! answer or reports that the operator cancelled. Cancellation is a normal
//! outcome (`Ok(None)`); turning it into a clean exit is the caller's job.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use tracing::debug;

use crate::error::{PromptError, Result};

/// Ask-with-default capability.
pub trait Prompt {
    /// Ask `label`, offering `default`.
    ///
    /// Returns `Ok(None)` if the operator cancelled.
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>>;

    /// Show an informational notice between prompts.
    fn notice(&mut self, _text: &str) {}
}

/// Terminal prompt backed by dialoguer. Ctrl+C cancels.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text();

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                debug!(label, "prompt interrupted");
                Ok(None)
            }
            Err(e) => Err(PromptError::Terminal(e.to_string()).into()),
        }
    }

    fn notice(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Line-oriented prompt for piped input.
///
/// One line answers one prompt; an empty line takes the default and end of
/// input cancels.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for Lines<R> {
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        eprint!("{} [{}]: ", label.trim_end(), default);
        let _ = io::stderr().flush();

        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(PromptError::Io)? == 0 {
            eprintln!();
            debug!(label, "input closed");
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    fn notice(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Pick the terminal prompt when stdin is interactive, lines otherwise.
pub fn from_stdin() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(Lines::new(io::stdin().lock()))
    }
}
