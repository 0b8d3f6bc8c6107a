//! Command definitions for the Pomato CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::PomatoConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomato - Simple Clock/Pomodoro Timer
#[derive(Parser, Debug)]
#[command(
    name = "pomato",
    version,
    about = "Simple clock and Pomodoro timer",
    long_about = "A terminal clock that doubles as a Pomodoro timer.\n\
                  Press SPACE to start or cancel a work interval and ENTER to reset.\n\
                  Desktop notifications announce every phase change.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive clock)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Phase durations
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Log notifications instead of showing desktop notifications
    #[arg(long, global = true, env = "POMATO_NO_NOTIFY")]
    pub no_notify: bool,

    /// Enable verbose output for debugging (-V prints the version)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file (the interactive clock discards them otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run without a screen, printing one JSON line per phase change
    Watch,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Timer Arguments
// ============================================================================

/// Durations and cadence of the timer.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TimerArgs {
    /// Work duration in minutes
    #[arg(short, long, default_value_t = 25, global = true, env = "POMATO_WORK")]
    pub work: u32,

    /// Short break duration in minutes
    #[arg(
        short,
        long,
        default_value_t = 5,
        global = true,
        env = "POMATO_SHORT_BREAK"
    )]
    pub short_break: u32,

    /// Long break duration in minutes
    #[arg(
        short,
        long,
        default_value_t = 15,
        global = true,
        env = "POMATO_LONG_BREAK"
    )]
    pub long_break: u32,

    /// Work intervals before a long break
    #[arg(short, long, default_value_t = 4, global = true, env = "POMATO_INTERVALS")]
    pub intervals: u32,
}

impl TimerArgs {
    /// Builds the (not yet validated) timer configuration.
    pub fn to_config(&self) -> PomatoConfig {
        PomatoConfig::default()
            .with_work_minutes(self.work)
            .with_short_break_minutes(self.short_break)
            .with_long_break_minutes(self.long_break)
            .with_intervals_before_long_break(self.intervals)
    }
}

impl Default for TimerArgs {
    fn default() -> Self {
        let config = PomatoConfig::default();
        Self {
            work: config.work_minutes,
            short_break: config.short_break_minutes,
            long_break: config.long_break_minutes,
            intervals: config.intervals_before_long_break,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
