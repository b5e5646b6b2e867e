//! Terminal session for the host.
//!
//! Puts the terminal into raw mode with mouse capture, reads crossterm events
//! synchronously, and prints one line per emitted event. The terminal is
//! restored on drop, including on early return.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    ExecutableCommand,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use thiserror::Error;

use crate::{
    config::HostConfig,
    host::{Host, HostOutput},
    input::translate,
};

/// Terminal session errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Event detail could not be serialized.
    #[error("detail serialization error: {0}")]
    Detail(#[from] serde_json::Error),
}

/// Raw-mode terminal session.
pub struct TerminalSession {
    out: Stdout,
    config: HostConfig,
}

impl TerminalSession {
    /// Enter raw mode and enable mouse capture.
    pub fn new(config: HostConfig) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        // Drop restores raw mode if mouse capture fails.
        let mut session = Self { out: stdout(), config };
        session.out.execute(EnableMouseCapture)?;
        Ok(session)
    }

    /// Run until the user quits.
    pub fn run(mut self) -> Result<(), TerminalError> {
        let mut host = Host::new(self.config.clone());
        tracing::info!(config = ?self.config, "session started");

        self.print_line("Tab: focus trailing action | Enter/Space/Del/Backspace: interact")?;
        self.print_line("Arrows/Home/End: navigate | click: interact | Esc/q: quit")?;
        self.print_line(&host.status())?;

        loop {
            let event = event::read()?;
            let Some(input) = translate(&event, self.config.legacy_keys) else {
                continue;
            };
            tracing::debug!(?input, "dispatching");

            let Some(outputs) = host.dispatch(input) else {
                break;
            };
            for output in &outputs {
                self.print_output(output)?;
            }
            self.print_line(&host.status())?;
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn print_output(&mut self, output: &HostOutput) -> Result<(), TerminalError> {
        let line = output.to_line()?;
        self.print_line(&line)
    }

    fn print_line(&mut self, line: &str) -> Result<(), TerminalError> {
        // Raw mode disables newline translation.
        write!(self.out, "{line}\r\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.out.execute(DisableMouseCapture);
        let _ = disable_raw_mode();
    }
}
