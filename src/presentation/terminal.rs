//! Raw-mode terminal session.
//!
//! `TerminalGuard` restores the terminal when it is dropped, so a failure
//! partway through setup or a panic in the event loop never leaves the
//! shell in raw mode on the alternate screen.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

pub struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    ///
    /// The guard exists as soon as raw mode is on, so an error while entering
    /// the alternate screen still undoes raw mode.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::armed(out);
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn armed(out: W) -> Self {
        Self { out, restored: false }
    }

    /// Leaves raw mode and the alternate screen. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let raw = disable_raw_mode();
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that shares its buffer so output stays visible after a drop.
    #[derive(Clone, Default)]
    struct SharedBuffer(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn leave_sequence() -> Vec<u8> {
        let mut expected = Vec::new();
        execute!(expected, LeaveAlternateScreen, DisableMouseCapture, Show).unwrap();
        expected
    }

    #[test]
    fn test_drop_restores_screen() {
        let buffer = SharedBuffer::default();
        drop(TerminalGuard::armed(buffer.clone()));
        assert_eq!(*buffer.0.borrow(), leave_sequence());
    }

    #[test]
    fn test_restore_runs_once() {
        let buffer = SharedBuffer::default();
        let mut guard = TerminalGuard::armed(buffer.clone());
        guard.restore().unwrap();
        guard.restore().unwrap();
        drop(guard);
        assert_eq!(*buffer.0.borrow(), leave_sequence());
    }
}
