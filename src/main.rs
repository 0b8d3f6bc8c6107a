//! Pomato - Simple Clock/Pomodoro Timer
//!
//! A terminal clock that runs Pomodoro cycles:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 work intervals

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomato::cli::{Cli, Commands, Display};
use pomato::engine::{SystemClock, TimerMachine};
use pomato::notification::{DesktopNotifier, LogNotifier, NotificationDispatcher, Notifier};
use pomato::{tui, watch};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    Stderr,
    Discard,
}

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool, log_file: Option<&Path>, fallback: LogSink) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match (log_file, fallback) {
        (Some(path), _) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, LogSink::Stderr) => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .without_time()
                .with_writer(io::stderr)
                .init();
        }
        (None, LogSink::Discard) => {
            fmt().with_env_filter(filter).with_writer(io::sink).init();
        }
    }

    Ok(())
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        generate_completions(*shell);
        return Ok(());
    }

    let machine = TimerMachine::new(cli.timer.to_config()).map_err(|e| {
        anyhow::anyhow!("Invalid timer configuration: {e} ({})", e.suggestion())
    })?;

    let notifier: Arc<dyn Notifier> = if cli.no_notify {
        Arc::new(LogNotifier)
    } else {
        Arc::new(DesktopNotifier::new())
    };
    let dispatcher = NotificationDispatcher::new(notifier);

    match cli.command {
        Some(Commands::Watch) => {
            init_tracing(cli.verbose, cli.log_file.as_deref(), LogSink::Stderr)?;
            watch::run(machine, SystemClock, dispatcher, io::stdout(), shutdown_signal()).await
        }
        _ => {
            init_tracing(cli.verbose, cli.log_file.as_deref(), LogSink::Discard)?;
            tracing::info!(config = ?machine.config(), "starting clock");
            tui::run(machine, dispatcher).await
        }
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
