//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage, styled with [`CatalogTheme`]
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use catalog_lint::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//! ui.message("Line 2: problem");
//! ui.success("Catalog is valid");
//!
//! assert_eq!(ui.messages(), ["Line 2: problem".to_string()]);
//! assert!(ui.successes().is_empty());
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CatalogTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display primary output (diagnostics, formatted text). Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Whether colored output is enabled.
    fn use_color(&self) -> bool {
        false
    }
}
