//! Session state machine.
//!
//! Owns the candidate password, the suggestion slot and the animation
//! phase. Every mutation goes through [`Session::handle_key`] or
//! [`Session::advance`], called between renders by the runtime.

use secrecy::{ExposeSecret, SecretString};

use super::clipboard::Clipboard;
use super::input::{KeyInput, PasswordBuffer};
use crate::evaluator::evaluate_password_strength;
use crate::generator::{DEFAULT_LENGTH, generate_password};
use crate::types::PasswordAnalysis;

/// Suggestions the renderer shows at most.
pub const MAX_DISPLAYED_SUGGESTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Exiting,
}

/// What the runtime has to do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    None,
    /// Show the message for the confirmation pause.
    Confirm(String),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderPayload<'a> {
    /// Number of characters typed; the password itself is never rendered.
    pub masked_len: usize,
    pub analysis: PasswordAnalysis,
    pub suggestion: Option<&'a str>,
    /// Whether the suggestion reached the clipboard.
    pub copied: bool,
    pub phase: u64,
    pub banner: Option<&'a str>,
}

impl RenderPayload<'_> {
    /// Suggestions capped to [`MAX_DISPLAYED_SUGGESTIONS`].
    pub fn displayed_suggestions(&self) -> &[String] {
        let shown = self.analysis.suggestions.len().min(MAX_DISPLAYED_SUGGESTIONS);
        &self.analysis.suggestions[..shown]
    }
}

pub struct Session {
    status: SessionStatus,
    buffer: PasswordBuffer,
    suggestion: Option<SecretString>,
    copied: bool,
    phase: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Running,
            buffer: PasswordBuffer::new(),
            suggestion: None,
            copied: false,
            phase: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn buffer(&self) -> &PasswordBuffer {
        &self.buffer
    }

    pub fn suggestion(&self) -> Option<&SecretString> {
        self.suggestion.as_ref()
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn phase(&self) -> u64 {
        self.phase
    }

    /// Current analysis of the candidate password.
    pub fn analysis(&self) -> PasswordAnalysis {
        evaluate_password_strength(self.buffer.secret())
    }

    /// Advances the animation by one tick.
    pub fn advance(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }

    pub fn interrupt(&mut self) {
        self.status = SessionStatus::Exiting;
    }

    /// Applies one key to the session.
    pub fn handle_key<C>(&mut self, key: KeyInput, clipboard: &mut C) -> SessionAction
    where
        C: Clipboard + ?Sized,
    {
        match key {
            KeyInput::Char(c) => {
                self.buffer.push(c);
                SessionAction::None
            }
            KeyInput::Backspace => {
                self.buffer.pop();
                SessionAction::None
            }
            KeyInput::Enter => {
                let analysis = self.analysis();
                SessionAction::Confirm(format!(
                    "Final rating: {}, entropy {:?} bits.",
                    analysis.rating, analysis.entropy_bits
                ))
            }
            KeyInput::Suggest => {
                self.suggest(clipboard);
                SessionAction::None
            }
            KeyInput::Interrupt => {
                self.interrupt();
                SessionAction::None
            }
        }
    }

    fn suggest<C>(&mut self, clipboard: &mut C)
    where
        C: Clipboard + ?Sized,
    {
        let password = match generate_password(DEFAULT_LENGTH) {
            Ok(password) => password,
            Err(e) => {
                tracing::error!("Password generation failed: {}", e);
                return;
            }
        };

        self.copied = match clipboard.copy(password.expose_secret()) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Clipboard copy skipped: {}", e);
                false
            }
        };
        self.suggestion = Some(password);
    }

    /// Builds the render payload, recomputing the analysis.
    pub fn payload<'a>(&'a self, banner: Option<&'a str>) -> RenderPayload<'a> {
        RenderPayload {
            masked_len: self.buffer.len(),
            analysis: self.analysis(),
            suggestion: self.suggestion.as_ref().map(|s| s.expose_secret()),
            copied: self.copied,
            phase: self.phase,
            banner,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
