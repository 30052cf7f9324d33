//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{CatalogTheme, OutputMode, UserInterface};

/// Terminal UI writing results to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CatalogTheme,
    mode: OutputMode,
    color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        let theme = if color {
            CatalogTheme::new()
        } else {
            CatalogTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn use_color(&self) -> bool {
        self.color
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode, color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, color))
}
