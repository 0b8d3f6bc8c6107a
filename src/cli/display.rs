//! Display utilities for Pomato.
//!
//! This module provides text formatting shared by the interactive clock and
//! the headless watch mode:
//! - Countdown and wall-clock readouts
//! - Phase labels and key hints
//! - Error messages

use crate::types::{ClockFace, DisplayState, Phase};

/// Key hint shown on the idle clock face.
pub const IDLE_HINT: &str = "[SPACE] to START! - [ENTER] to RESTART!";

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// The big readout: `HH:MM` while idle, `MM:SS` during a countdown.
    pub fn headline(state: &DisplayState) -> String {
        match state.remaining_seconds {
            Some(remaining) if state.phase.is_active() => Self::format_countdown(remaining),
            _ => Self::format_clock(&state.clock),
        }
    }

    /// Formats remaining seconds as `MM:SS`.
    pub fn format_countdown(total_seconds: u64) -> String {
        let (minutes, seconds) = Self::format_time(total_seconds);
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Formats a wall clock as `HH:MM`.
    pub fn format_clock(clock: &ClockFace) -> String {
        format!("{:02}:{:02}", clock.hour, clock.minute)
    }

    /// Human-readable phase name.
    pub fn phase_label(phase: Phase) -> &'static str {
        match phase {
            Phase::Idle => "Clock",
            Phase::Work => "Work",
            Phase::ShortBreak => "Pause",
            Phase::LongBreak => "Long pause",
        }
    }

    /// One marker per interval in the cycle, filled for completed ones.
    pub fn interval_markers(completed: u32, total: u32) -> String {
        (0..total)
            .map(|i| if i < completed { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u64) -> (u64, u64) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(phase: Phase, remaining_seconds: Option<u64>) -> DisplayState {
        DisplayState {
            phase,
            remaining_seconds,
            clock: ClockFace { hour: 7, minute: 3 },
            completed_work_intervals: 0,
        }
    }

    mod format_time_tests {
        use super::*;

        #[test]
        fn test_format_time_zero() {
            assert_eq!(Display::format_time(0), (0, 0));
        }

        #[test]
        fn test_format_time_minutes_and_seconds() {
            assert_eq!(Display::format_time(1499), (24, 59));
        }

        #[test]
        fn test_format_countdown_pads() {
            assert_eq!(Display::format_countdown(1500), "25:00");
            assert_eq!(Display::format_countdown(61), "01:01");
            assert_eq!(Display::format_countdown(0), "00:00");
        }

        #[test]
        fn test_format_countdown_past_two_digits() {
            assert_eq!(Display::format_countdown(120 * 60), "120:00");
        }

        #[test]
        fn test_format_clock_pads() {
            assert_eq!(Display::format_clock(&ClockFace { hour: 7, minute: 3 }), "07:03");
            assert_eq!(
                Display::format_clock(&ClockFace {
                    hour: 23,
                    minute: 59
                }),
                "23:59"
            );
        }
    }

    mod headline_tests {
        use super::*;

        #[test]
        fn test_headline_idle_shows_clock() {
            assert_eq!(Display::headline(&state(Phase::Idle, None)), "07:03");
        }

        #[test]
        fn test_headline_active_shows_countdown() {
            assert_eq!(Display::headline(&state(Phase::Work, Some(1499))), "24:59");
            assert_eq!(
                Display::headline(&state(Phase::LongBreak, Some(900))),
                "15:00"
            );
        }
    }

    mod label_tests {
        use super::*;

        #[test]
        fn test_phase_label() {
            assert_eq!(Display::phase_label(Phase::Idle), "Clock");
            assert_eq!(Display::phase_label(Phase::ShortBreak), "Pause");
        }

        #[test]
        fn test_interval_markers() {
            assert_eq!(Display::interval_markers(0, 4), "○ ○ ○ ○");
            assert_eq!(Display::interval_markers(2, 4), "● ● ○ ○");
            assert_eq!(Display::interval_markers(4, 4), "● ● ● ●");
            assert_eq!(Display::interval_markers(0, 0), "");
        }
    }
}
