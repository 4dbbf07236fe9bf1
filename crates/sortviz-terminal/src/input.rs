//! Key handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal event means to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text typed at the menu prompt.
    Text(String),
    /// Enter.
    Submit,
    /// Delete the last typed character.
    Backspace,
    /// Draw a fresh random sequence.
    Regenerate,
    /// `q` or `Esc`: leave the menu, or stop a run and return to it.
    Quit,
    /// `Ctrl+C`: leave the program, even mid-run.
    Interrupt,
    /// The terminal changed size.
    Resize,
    /// Anything else.
    Ignore,
}

impl Input {
    /// Translate a crossterm event. Key releases are ignored.
    #[must_use]
    pub fn from_event(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::from_key(key),
            Event::Resize(..) => Self::Resize,
            Event::Paste(text) => Self::Text(text),
            _ => Self::Ignore,
        }
    }

    fn from_key(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Self::Interrupt,
                _ => Self::Ignore,
            };
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Self::Quit,
            KeyCode::Char('r' | 'R') => Self::Regenerate,
            KeyCode::Char(c) => Self::Text(c.to_string()),
            KeyCode::Enter => Self::Submit,
            KeyCode::Backspace => Self::Backspace,
            _ => Self::Ignore,
        }
    }

    /// Whether this input ends a running animation.
    #[must_use]
    pub const fn stops_run(&self) -> bool {
        matches!(self, Self::Quit | Self::Interrupt)
    }
}

/// Single-line prompt buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
}

impl LineInput {
    /// Longest accepted line, in characters.
    pub const MAX_CHARS: usize = 16;

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append typed text, dropping control characters and anything past
    /// [`LineInput::MAX_CHARS`].
    pub fn push_str(&mut self, text: &str) {
        let room = Self::MAX_CHARS.saturating_sub(self.text.chars().count());
        self.text
            .extend(text.chars().filter(|c| !c.is_control()).take(room));
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Take the line, leaving the prompt empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
