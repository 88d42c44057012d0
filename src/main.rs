//! Sling CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sling::cli::commands::completions;
use sling::cli::{Cli, Commands};
use sling::picker::TerminalPicker;
use sling::registry::Registry;
use sling::session::{PromptHistory, Session};
use sling::ui::{should_use_colors, Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("sling=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sling=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("sling starting with args: {:?}", cli);

    if let Some(Commands::Completions(args)) = &cli.command {
        completions::generate(args.shell);
        return ExitCode::SUCCESS;
    }

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output = Output::new(output_mode, should_use_colors());

    let picker = Arc::new(TerminalPicker::new());
    let registry = Registry::with_builtins(picker);
    let history = PromptHistory::load(cli.history_file.clone());
    let mut session = Session::new(registry, output.clone(), history);

    if let Some(address) = &cli.address {
        if let Err(e) = session.connect(address).await {
            output.render_error(&e);
            return ExitCode::from(1);
        }
    }

    match session.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.render_error(&e);
            ExitCode::from(1)
        }
    }
}
