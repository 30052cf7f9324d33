//! catalog-lint CLI entry point.

use std::process::ExitCode;

use catalog_lint::cli::{Cli, CommandDispatcher, EXIT_INVALID_INPUT};
use catalog_lint::config::find_project_root;
use catalog_lint::ui::{create_ui, should_use_colors, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with formatted output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("catalog_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_lint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("catalog-lint starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = create_ui(output_mode, !cli.no_color && should_use_colors());

    // Determine project root
    let project_root = match &cli.project {
        Some(project) => project.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_default();
            find_project_root(&cwd).unwrap_or(cwd)
        }
    };

    let dispatcher = CommandDispatcher::from_cli(project_root, &cli);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_INVALID_INPUT as u8)
        }
    }
}
