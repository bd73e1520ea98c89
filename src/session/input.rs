//! Key input and the candidate password buffer.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use secrecy::{ExposeSecret, SecretString};

/// Key events the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Remove the last character.
    Backspace,
    /// Show the final rating.
    Enter,
    /// Generate a suggested password.
    Suggest,
    /// Leave the session.
    Interrupt,
}

impl KeyInput {
    /// Converts a terminal event, `None` for anything the session ignores.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(key),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // AltGr arrives as Ctrl+Alt on Windows
        let alt_gr = control && alt;
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if control => Some(Self::Interrupt),
            KeyCode::Esc => Some(Self::Interrupt),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Tab => Some(Self::Suggest),
            KeyCode::Char(c) if (alt_gr || (!control && !alt)) && !c.is_control() => {
                Some(Self::Char(c))
            }
            _ => None,
        }
    }
}

/// The in-progress password, kept behind [`SecretString`].
pub struct PasswordBuffer {
    secret: SecretString,
}

impl PasswordBuffer {
    pub fn new() -> Self {
        Self {
            secret: SecretString::new(String::new().into()),
        }
    }

    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.secret.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.secret.expose_secret().is_empty()
    }

    pub fn push(&mut self, c: char) {
        let mut next = String::with_capacity(self.secret.expose_secret().len() + c.len_utf8());
        next.push_str(self.secret.expose_secret());
        next.push(c);
        self.secret = SecretString::new(next.into());
    }

    /// Removes the last character, no-op when empty.
    pub fn pop(&mut self) {
        let mut next = self.secret.expose_secret().to_string();
        if next.pop().is_some() {
            self.secret = SecretString::new(next.into());
        }
    }
}

impl Default for PasswordBuffer {
    fn default() -> Self {
        Self::new()
    }
}
