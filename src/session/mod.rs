//! Interactive terminal session
//!
//! Keystrokes mutate the candidate password, every tick re-renders the
//! live analysis. Terminal I/O is crossterm, rendering is ratatui, and
//! the loop runs on a single tokio task.

mod clipboard;
mod input;
mod runtime;
mod state;
mod terminal;
mod ui;

use std::io;
use thiserror::Error;

pub use clipboard::{Clipboard, ClipboardError, NoClipboard, Osc52Clipboard};
pub use input::{KeyInput, PasswordBuffer};
pub use runtime::{LoopTiming, run, run_loop};
pub use state::{MAX_DISPLAYED_SUGGESTIONS, RenderPayload, Session, SessionAction, SessionStatus};
pub use terminal::{TerminalGuard, check_interactive, ensure_interactive};
pub use ui::render;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Stdin or stdout is not an interactive terminal.
    #[error("not running in an interactive terminal")]
    NotATerminal,

    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend failed to draw a frame.
    #[error("render error: {0}")]
    Render(String),
}
