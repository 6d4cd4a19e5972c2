//! fsnav CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use fsnav::cli::{Cli, CommandDispatcher};
use fsnav::ui::{should_use_colors, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fsnav=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fsnav=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("fsnav starting with args: {:?}", cli);

    let state_dir = cli
        .state_dir
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = TerminalUI::new(!cli.no_color && should_use_colors());
    let dispatcher = CommandDispatcher::new(state_dir);

    let result = dispatcher.dispatch(&cli, &mut ui);
    ExitCode::from(result.exit_code as u8)
}
