//! Pomato Library
//!
//! This library provides the core functionality for the Pomato clock/Pomodoro
//! timer. It includes:
//! - Timer state machine driven by externally sampled wall-clock time
//! - Clock sources (system and synthetic)
//! - Type definitions for configuration, phases and display snapshots
//! - Notification delivery (desktop, log-only, mock)
//! - CLI command parsing and display utilities
//! - Interactive terminal clock and headless watch mode

pub mod cli;
pub mod engine;
pub mod notification;
pub mod tui;
pub mod types;
pub mod watch;

// Re-export commonly used types for convenience
pub use engine::{Clock, ManualClock, SystemClock, TimerEvent, TimerMachine};
pub use types::{
    ClockFace, ConfigError, DisplayState, DurationSetting, Phase, PomatoConfig, Timestamp,
};

// Re-export notification types
pub use notification::{
    DesktopNotifier, LogNotifier, MockNotifier, NotificationDispatcher, NotificationError,
    Notifier,
};
