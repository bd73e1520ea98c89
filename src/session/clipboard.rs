//! Clipboard collaborator.
//!
//! Copies are best-effort: the session drops any [`ClipboardError`].

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::clipboard::CopyToClipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is disabled")]
    Disabled,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can take a copy of a string.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through the terminal with an OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.queue(CopyToClipboard::to_clipboard_from(text))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clipboard that always refuses.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}
