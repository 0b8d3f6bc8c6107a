//! Timer engine for Pomato.
//!
//! This module contains the core timer functionality:
//! - `machine`: Phase state machine driven by sampled wall-clock time
//! - `clock`: Clock sources that hosts sample before each call

pub mod clock;
pub mod machine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use machine::{TimerEvent, TimerMachine};

/// How often hosts sample the clock; well under a second so the displayed
/// countdown never skips a value.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(250);
