//! Terminal backends and the session guard.
//!
//! [`TerminalBackend`] is the thin layer of raw crossterm calls; it exists
//! so the app can be driven by [`TestableBackend`] in tests. [`Session`]
//! puts the terminal into raw mode on the alternate screen and restores it
//! when dropped, on every exit path.

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use tracing::{debug, warn};

use crate::direct::{CellBuffer, DiffRenderer};
use crate::error::TuiError;

/// Raw terminal operations.
pub trait TerminalBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError>;
    fn disable_raw_mode(&mut self) -> Result<(), TuiError>;
    fn enter_alternate_screen(&mut self) -> Result<(), TuiError>;
    fn leave_alternate_screen(&mut self) -> Result<(), TuiError>;
    fn hide_cursor(&mut self) -> Result<(), TuiError>;
    fn show_cursor(&mut self) -> Result<(), TuiError>;
    fn size(&self) -> Result<(u16, u16), TuiError>;
    /// Wait up to `timeout` for an event.
    fn poll(&mut self, timeout: Duration) -> Result<bool, TuiError>;
    fn read_event(&mut self) -> Result<Event, TuiError>;
    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), TuiError>;
}

/// Real crossterm backend on stdout.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError> {
        enable_raw_mode().map_err(|err| {
            debug!(%err, "enable_raw_mode failed");
            TuiError::TerminalNotAvailable
        })
    }
    fn disable_raw_mode(&mut self) -> Result<(), TuiError> {
        disable_raw_mode()?;
        Ok(())
    }
    fn enter_alternate_screen(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, EnterAlternateScreen, Clear(ClearType::All))?;
        Ok(())
    }
    fn leave_alternate_screen(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }
    fn hide_cursor(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }
    fn show_cursor(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, cursor::Show)?;
        Ok(())
    }
    fn size(&self) -> Result<(u16, u16), TuiError> {
        Ok(crossterm::terminal::size()?)
    }
    fn poll(&mut self, timeout: Duration) -> Result<bool, TuiError> {
        Ok(event::poll(timeout)?)
    }
    fn read_event(&mut self) -> Result<Event, TuiError> {
        Ok(event::read()?)
    }
    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), TuiError> {
        renderer.flush(buffer, &mut self.stdout)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Scripted backend that captures output in a writer.
///
/// Events are handed out in order; once they run out, `read_event` fails
/// with `WouldBlock` so a test that forgets to quit ends with an error
/// instead of hanging. `poll` never sleeps: it answers from a separate
/// script and reports `false` once that runs out, the same as a user who
/// never touches the keyboard mid-run.
#[allow(clippy::struct_excessive_bools)]
pub struct TestableBackend<W: Write> {
    writer: W,
    size: (u16, u16),
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    events: VecDeque<Event>,
    polls: VecDeque<bool>,
    frames: usize,
}

impl<W: Write> TestableBackend<W> {
    /// Create a backend with the given writer and size.
    pub fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            size: (width, height),
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
            events: VecDeque::new(),
            polls: VecDeque::new(),
            frames: 0,
        }
    }

    /// Queue events to be returned by `read_event`.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    /// Queue answers for `poll`.
    #[must_use]
    pub fn with_polls(mut self, polls: impl IntoIterator<Item = bool>) -> Self {
        self.polls.extend(polls);
        self
    }

    /// Change the reported size, as a resize would.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    pub const fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub const fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub const fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Events not yet consumed.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Number of frames flushed so far.
    pub const fn frames(&self) -> usize {
        self.frames
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the underlying writer (consumes self).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TerminalBackend for TestableBackend<W> {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), TuiError> {
        self.raw_mode = false;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<(), TuiError> {
        self.alternate_screen = true;
        execute!(self.writer, EnterAlternateScreen)?;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<(), TuiError> {
        self.alternate_screen = false;
        execute!(self.writer, LeaveAlternateScreen)?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), TuiError> {
        self.cursor_hidden = true;
        execute!(self.writer, cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), TuiError> {
        self.cursor_hidden = false;
        execute!(self.writer, cursor::Show)?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), TuiError> {
        Ok(self.size)
    }

    fn poll(&mut self, _timeout: Duration) -> Result<bool, TuiError> {
        Ok(self.polls.pop_front().unwrap_or(false))
    }

    fn read_event(&mut self) -> Result<Event, TuiError> {
        self.events
            .pop_front()
            .ok_or_else(|| TuiError::Io(io::Error::new(io::ErrorKind::WouldBlock, "no events")))
    }

    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), TuiError> {
        renderer.flush(buffer, &mut self.writer)?;
        self.writer.flush()?;
        self.frames += 1;
        Ok(())
    }
}

/// Raw mode plus alternate screen for as long as the value lives.
pub struct Session<'b, B: TerminalBackend> {
    backend: &'b mut B,
    active: bool,
}

impl<'b, B: TerminalBackend> Session<'b, B> {
    /// Enter raw mode and the alternate screen, and hide the cursor. If any
    /// step fails, whatever was already set up is undone before returning.
    pub fn enter(backend: &'b mut B) -> Result<Self, TuiError> {
        let session = Self {
            backend,
            active: true,
        };
        session.backend.enable_raw_mode()?;
        session.backend.enter_alternate_screen()?;
        session.backend.hide_cursor()?;
        debug!("terminal session started");
        Ok(session)
    }

    pub fn backend(&mut self) -> &mut B {
        &mut *self.backend
    }

    /// Restore the terminal now, reporting the first failure.
    pub fn finish(mut self) -> Result<(), TuiError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TuiError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        // Every step runs even if an earlier one fails.
        let cursor = self.backend.show_cursor();
        let screen = self.backend.leave_alternate_screen();
        let raw = self.backend.disable_raw_mode();
        debug!("terminal session restored");
        cursor.and(screen).and(raw)
    }
}

impl<B: TerminalBackend> Drop for Session<'_, B> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    struct FailingScreen {
        raw_mode: bool,
    }

    impl TerminalBackend for FailingScreen {
        fn enable_raw_mode(&mut self) -> Result<(), TuiError> {
            self.raw_mode = true;
            Ok(())
        }
        fn disable_raw_mode(&mut self) -> Result<(), TuiError> {
            self.raw_mode = false;
            Ok(())
        }
        fn enter_alternate_screen(&mut self) -> Result<(), TuiError> {
            Err(TuiError::TerminalNotAvailable)
        }
        fn leave_alternate_screen(&mut self) -> Result<(), TuiError> {
            Ok(())
        }
        fn hide_cursor(&mut self) -> Result<(), TuiError> {
            Ok(())
        }
        fn show_cursor(&mut self) -> Result<(), TuiError> {
            Ok(())
        }
        fn size(&self) -> Result<(u16, u16), TuiError> {
            Ok((0, 0))
        }
        fn poll(&mut self, _timeout: Duration) -> Result<bool, TuiError> {
            Ok(false)
        }
        fn read_event(&mut self) -> Result<Event, TuiError> {
            Err(TuiError::TerminalNotAvailable)
        }
        fn write_flush(
            &mut self,
            _buffer: &mut CellBuffer,
            _renderer: &mut DiffRenderer,
        ) -> Result<(), TuiError> {
            Ok(())
        }
    }

    #[test]
    fn test_session_enter_and_drop() {
        let mut backend = TestableBackend::new(Vec::new(), 80, 24);
        {
            let session = Session::enter(&mut backend).unwrap();
            drop(session);
        }
        assert!(!backend.is_raw_mode());
        assert!(!backend.is_alternate_screen());
        assert!(!backend.is_cursor_hidden());
    }

    #[test]
    fn test_session_active_state() {
        let mut backend = TestableBackend::new(Vec::new(), 80, 24);
        let mut session = Session::enter(&mut backend).unwrap();
        assert!(session.backend().is_raw_mode());
        assert!(session.backend().is_alternate_screen());
        assert!(session.backend().is_cursor_hidden());
        session.finish().unwrap();
        assert!(!backend.is_raw_mode());
    }

    #[test]
    fn test_failed_enter_undoes_raw_mode() {
        let mut backend = FailingScreen { raw_mode: false };
        let err = Session::enter(&mut backend).err();
        assert!(matches!(err, Some(TuiError::TerminalNotAvailable)));
        assert!(!backend.raw_mode);
    }

    #[test]
    fn test_escape_sequences_written() {
        let mut backend = TestableBackend::new(Vec::new(), 80, 24);
        Session::enter(&mut backend).unwrap().finish().unwrap();
        let out = String::from_utf8(backend.into_writer()).unwrap();
        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?1049l"));
    }

    #[test]
    fn test_scripted_events() {
        let mut backend = TestableBackend::new(Vec::new(), 10, 5)
            .with_events([Event::Key(KeyEvent::from(KeyCode::Char('q')))])
            .with_polls([true]);
        assert!(backend.poll(Duration::ZERO).unwrap());
        assert!(!backend.poll(Duration::ZERO).unwrap());
        assert_eq!(backend.pending_events(), 1);
        assert!(matches!(backend.read_event().unwrap(), Event::Key(_)));
        assert!(backend.read_event().is_err());
    }
}
