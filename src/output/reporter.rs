//! `TerminalReporter` — presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` so application services can emit progress events
//! without depending on any presentation type directly.

use std::sync::Mutex;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter.
///
/// On a TTY each `step()` replaces the previous step's spinner;
/// `success()` resolves it to a checkmark line. Off-TTY (or `--quiet`)
/// falls back to plain lines / silence.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: Mutex<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: Mutex::new(None),
        }
    }

    fn take_active(&self) -> Option<ProgressBar> {
        self.active.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if let Some(pb) = self.take_active() {
            pb.finish_and_clear();
        }
        if self.ctx.show_progress() {
            if let Ok(mut slot) = self.active.lock() {
                *slot = Some(progress::spinner(message));
            }
        } else if !self.ctx.quiet {
            println!("  {} {message}", "→".cyan());
        }
    }

    fn success(&self, message: &str) {
        if let Some(pb) = self.take_active() {
            progress::finish_ok(&pb, message);
        } else if !self.ctx.quiet {
            println!("  {} {message}", "✓".green());
        }
    }

    fn warn(&self, message: &str) {
        if let Some(pb) = self.take_active() {
            pb.finish_and_clear();
        }
        if !self.ctx.quiet {
            println!("  {} {message}", "!".yellow());
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        // A step interrupted by an error must not leave a live spinner
        // fighting stderr for the terminal.
        if let Some(pb) = self.take_active() {
            pb.finish_and_clear();
        }
    }
}
