// Terminal session
// Raw mode, alternate screen and mouse capture, undone in reverse on drop

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupStep {
    RawMode,
    AlternateScreen,
    MouseCapture,
}

/// Owns the terminal modes entered at startup
/// Only the steps that succeeded are undone, so a failed setup still leaves a usable shell
#[derive(Debug, Default)]
pub struct TerminalGuard {
    done: Vec<SetupStep>,
}

impl TerminalGuard {
    pub fn enter(mouse: bool) -> Result<Self> {
        let mut guard = Self::default();

        enable_raw_mode().context("failed to enable raw mode")?;
        guard.done.push(SetupStep::RawMode);

        execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
        guard.done.push(SetupStep::AlternateScreen);

        if mouse {
            execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
            guard.done.push(SetupStep::MouseCapture);
        }

        Ok(guard)
    }

    /// Steps still to undo, most recent first
    fn pending(&self) -> impl Iterator<Item = SetupStep> + '_ {
        self.done.iter().rev().copied()
    }

    fn undo(step: SetupStep) -> io::Result<()> {
        match step {
            SetupStep::RawMode => disable_raw_mode(),
            SetupStep::AlternateScreen => execute!(io::stdout(), LeaveAlternateScreen),
            SetupStep::MouseCapture => execute!(io::stdout(), DisableMouseCapture),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.done.is_empty() {
            return;
        }
        for step in self.pending() {
            if let Err(err) = Self::undo(step) {
                tracing::warn!(?step, error = %err, "failed to restore terminal");
            }
        }
        self.done.clear();
        if let Err(err) = execute!(io::stdout(), Show) {
            tracing::warn!(error = %err, "failed to show cursor");
        }
    }
}
