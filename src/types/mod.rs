//! Core data types for Pomato.
//!
//! This module defines the data structures used for:
//! - Timer phases and their per-phase behavior
//! - Timer configuration with validation
//! - Read-only display snapshots handed to the presentation layer

mod error;

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, DurationSetting};

/// An absolute wall-clock instant, carrying the local UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Title used for every notification the timer requests.
pub const NOTIFICATION_TITLE: &str = "Pomato";

// ============================================================================
// Phase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Only the wall clock is shown
    #[default]
    Idle,
    /// Counting down a work interval
    Work,
    /// Counting down a short rest
    ShortBreak,
    /// Counting down a long rest
    LongBreak,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Work => "work",
            Phase::ShortBreak => "short_break",
            Phase::LongBreak => "long_break",
        }
    }

    /// Returns true if a countdown is running.
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::Idle)
    }

    /// Length of the countdown for this phase, `None` for `Idle`.
    pub fn duration(&self, config: &PomatoConfig) -> Option<Duration> {
        let minutes = match self {
            Phase::Idle => return None,
            Phase::Work => config.work_minutes,
            Phase::ShortBreak => config.short_break_minutes,
            Phase::LongBreak => config.long_break_minutes,
        };
        Some(Duration::seconds(i64::from(minutes) * 60))
    }

    /// Notification message announced when this phase is entered.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            Phase::Idle => None,
            Phase::Work => Some("Time to Work!"),
            Phase::ShortBreak => Some("Time for a pause."),
            Phase::LongBreak => Some("Time for a long pause. Grab some tea!"),
        }
    }
}

// ============================================================================
// PomatoConfig
// ============================================================================

/// Configuration for the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomatoConfig {
    /// Work duration in minutes
    pub work_minutes: u32,
    /// Short break duration in minutes
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    pub long_break_minutes: u32,
    /// Completed work intervals that earn a long break
    pub intervals_before_long_break: u32,
}

impl Default for PomatoConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            intervals_before_long_break: 4,
        }
    }
}

impl PomatoConfig {
    /// Creates a new configuration with the specified work duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified long break cadence.
    pub fn with_intervals_before_long_break(mut self, intervals: u32) -> Self {
        self.intervals_before_long_break = intervals;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first zero duration found, or [`ConfigError::ZeroIntervals`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            (DurationSetting::Work, self.work_minutes),
            (DurationSetting::ShortBreak, self.short_break_minutes),
            (DurationSetting::LongBreak, self.long_break_minutes),
        ];
        for (setting, minutes) in durations {
            if minutes == 0 {
                return Err(ConfigError::ZeroDuration { setting });
            }
        }
        if self.intervals_before_long_break < 1 {
            return Err(ConfigError::ZeroIntervals);
        }
        Ok(())
    }
}

// ============================================================================
// DisplayState
// ============================================================================

/// Wall-clock hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    pub hour: u32,
    pub minute: u32,
}

impl ClockFace {
    /// Reads the local hour and minute of `at`.
    pub fn at(at: &Timestamp) -> Self {
        Self {
            hour: at.hour(),
            minute: at.minute(),
        }
    }
}

/// Read-only snapshot of what the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Current phase
    pub phase: Phase,
    /// Whole seconds left in the countdown, `None` while idle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u64>,
    /// Wall clock at the sampled instant
    pub clock: ClockFace,
    /// Work intervals finished since the last reset
    pub completed_work_intervals: u32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Phase Tests
    // ------------------------------------------------------------------------

    mod phase_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(Phase::default(), Phase::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Phase::Idle.as_str(), "idle");
            assert_eq!(Phase::Work.as_str(), "work");
            assert_eq!(Phase::ShortBreak.as_str(), "short_break");
            assert_eq!(Phase::LongBreak.as_str(), "long_break");
        }

        #[test]
        fn test_is_active() {
            assert!(!Phase::Idle.is_active());
            assert!(Phase::Work.is_active());
            assert!(Phase::ShortBreak.is_active());
            assert!(Phase::LongBreak.is_active());
        }

        #[test]
        fn test_serialize_matches_as_str() {
            for phase in [Phase::Idle, Phase::Work, Phase::ShortBreak, Phase::LongBreak] {
                let json = serde_json::to_string(&phase).unwrap();
                assert_eq!(json, format!("\"{}\"", phase.as_str()));
            }
        }

        #[test]
        fn test_duration_follows_config() {
            let config = PomatoConfig::default()
                .with_work_minutes(50)
                .with_short_break_minutes(10)
                .with_long_break_minutes(30);

            assert_eq!(Phase::Idle.duration(&config), None);
            assert_eq!(Phase::Work.duration(&config), Some(Duration::seconds(3000)));
            assert_eq!(
                Phase::ShortBreak.duration(&config),
                Some(Duration::seconds(600))
            );
            assert_eq!(
                Phase::LongBreak.duration(&config),
                Some(Duration::seconds(1800))
            );
        }

        #[test]
        fn test_announcement() {
            assert_eq!(Phase::Idle.announcement(), None);
            assert_eq!(Phase::Work.announcement(), Some("Time to Work!"));
            assert_eq!(Phase::ShortBreak.announcement(), Some("Time for a pause."));
            assert_eq!(
                Phase::LongBreak.announcement(),
                Some("Time for a long pause. Grab some tea!")
            );
        }
    }

    // ------------------------------------------------------------------------
    // PomatoConfig Tests
    // ------------------------------------------------------------------------

    mod config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = PomatoConfig::default();
            assert_eq!(config.work_minutes, 25);
            assert_eq!(config.short_break_minutes, 5);
            assert_eq!(config.long_break_minutes, 15);
            assert_eq!(config.intervals_before_long_break, 4);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_builder_methods() {
            let config = PomatoConfig::default()
                .with_work_minutes(45)
                .with_short_break_minutes(8)
                .with_long_break_minutes(20)
                .with_intervals_before_long_break(3);

            assert_eq!(config.work_minutes, 45);
            assert_eq!(config.short_break_minutes, 8);
            assert_eq!(config.long_break_minutes, 20);
            assert_eq!(config.intervals_before_long_break, 3);
        }

        #[test]
        fn test_validate_zero_work() {
            let config = PomatoConfig::default().with_work_minutes(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroDuration {
                    setting: DurationSetting::Work
                })
            );
        }

        #[test]
        fn test_validate_zero_breaks() {
            let config = PomatoConfig::default().with_short_break_minutes(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroDuration {
                    setting: DurationSetting::ShortBreak
                })
            );

            let config = PomatoConfig::default().with_long_break_minutes(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroDuration {
                    setting: DurationSetting::LongBreak
                })
            );
        }

        #[test]
        fn test_validate_zero_intervals() {
            let config = PomatoConfig::default().with_intervals_before_long_break(0);
            assert_eq!(config.validate(), Err(ConfigError::ZeroIntervals));
        }

        #[test]
        fn test_validate_single_interval() {
            let config = PomatoConfig::default().with_intervals_before_long_break(1);
            assert!(config.validate().is_ok());
        }
    }

    // ------------------------------------------------------------------------
    // DisplayState Tests
    // ------------------------------------------------------------------------

    mod display_state_tests {
        use super::*;

        fn timestamp(rfc3339: &str) -> Timestamp {
            DateTime::parse_from_rfc3339(rfc3339).unwrap()
        }

        #[test]
        fn test_clock_face_uses_local_offset() {
            let at = timestamp("2024-03-01T23:45:10+09:00");
            assert_eq!(
                ClockFace::at(&at),
                ClockFace {
                    hour: 23,
                    minute: 45
                }
            );
        }

        #[test]
        fn test_idle_state_omits_remaining_seconds() {
            let state = DisplayState {
                phase: Phase::Idle,
                remaining_seconds: None,
                clock: ClockFace { hour: 9, minute: 5 },
                completed_work_intervals: 0,
            };

            let json = serde_json::to_string(&state).unwrap();
            assert!(!json.contains("remaining_seconds"));
            assert!(json.contains("\"phase\":\"idle\""));
        }

        #[test]
        fn test_active_state_serializes_remaining_seconds() {
            let state = DisplayState {
                phase: Phase::Work,
                remaining_seconds: Some(1499),
                clock: ClockFace { hour: 9, minute: 5 },
                completed_work_intervals: 2,
            };

            let json = serde_json::to_string(&state).unwrap();
            assert!(json.contains("\"remaining_seconds\":1499"));
            assert!(json.contains("\"completed_work_intervals\":2"));
        }
    }
}
