//! Output formatting module

pub mod progress;
pub mod reporter;

use std::io::IsTerminal as _;

pub use reporter::TerminalReporter;

/// Output context carrying terminal state and verbosity.
pub struct OutputContext {
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        if no_color || !is_tty {
            owo_colors::set_override(false);
        }
        Self { is_tty, quiet }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        use owo_colors::OwoColorize as _;
        eprintln!("  {} {msg}", "✗".red());
    }

    /// Print an info message. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {msg}");
        }
    }
}
