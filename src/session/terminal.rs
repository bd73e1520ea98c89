//! Terminal setup and guaranteed restoration.

use std::io::{self, IsTerminal, Stdout, Write, stdout};
use std::panic;

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use super::SessionError;

/// Fails unless both stdin and stdout are interactive terminals.
pub fn ensure_interactive() -> Result<(), SessionError> {
    check_interactive(io::stdin().is_terminal(), io::stdout().is_terminal())
}

/// The session needs a terminal on both ends.
pub fn check_interactive(stdin_tty: bool, stdout_tty: bool) -> Result<(), SessionError> {
    if stdin_tty && stdout_tty {
        Ok(())
    } else {
        Err(SessionError::NotATerminal)
    }
}

/// Raw mode and alternate screen for as long as the guard lives.
///
/// Dropping the guard restores the terminal on every exit path; a panic
/// hook does the same before the panic message is printed.
pub struct TerminalGuard<W: Write = Stdout> {
    out: W,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> Result<Self, SessionError> {
        install_panic_hook();

        enable_raw_mode()?;
        let guard = Self::enter_screen(stdout())?;

        tracing::debug!("Terminal entered raw mode");
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Switches `out` to the alternate screen with the cursor hidden.
    ///
    /// Not a guard until this succeeds, so a failure restores by hand.
    pub fn enter_screen(mut out: W) -> Result<Self, SessionError> {
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            restore(&mut out);
            return Err(e.into());
        }
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        restore(&mut self.out);
        tracing::debug!("Terminal restored");
    }
}

/// Best effort: every step runs even if an earlier one failed.
fn restore<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, cursor::Show);
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore(&mut stdout());
        original_hook(panic_info);
    }));
}
