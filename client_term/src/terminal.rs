//! Raw-mode terminal session

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::renderer::CellSurface;

/// Owns the terminal while a match is on screen; restores it on drop
pub struct TerminalSession<W: Write = Stdout> {
    out: W,
    key_release: bool,
}

impl TerminalSession<Stdout> {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        // From here on a failed step unwinds through Drop
        let mut session = Self::with_output(io::stdout());
        // Key release events need the kitty keyboard protocol
        let key_release = terminal::supports_keyboard_enhancement().unwrap_or(false);
        session.setup(key_release)?;
        Ok(session)
    }
}

impl<W: Write> TerminalSession<W> {
    fn with_output(out: W) -> Self {
        Self {
            out,
            key_release: false,
        }
    }

    fn setup(&mut self, key_release: bool) -> Result<()> {
        execute!(self.out, EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        if key_release {
            execute!(
                self.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release events")?;
            self.key_release = true;
        }
        Ok(())
    }

    /// Whether the terminal reports key releases
    pub fn reports_key_release(&self) -> bool {
        self.key_release
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("failed to query terminal size")
    }

    pub fn present(&mut self, surface: &CellSurface) -> Result<()> {
        for (row, line) in surface.lines().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush().context("failed to flush frame")
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.key_release {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
