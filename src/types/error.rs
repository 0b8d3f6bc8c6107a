//! Configuration error types.

use std::fmt;

use thiserror::Error;

/// A configurable phase duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSetting {
    Work,
    ShortBreak,
    LongBreak,
}

impl DurationSetting {
    /// Returns the command-line flag that controls this setting.
    pub fn flag(&self) -> &'static str {
        match self {
            DurationSetting::Work => "--work",
            DurationSetting::ShortBreak => "--short-break",
            DurationSetting::LongBreak => "--long-break",
        }
    }
}

impl fmt::Display for DurationSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationSetting::Work => write!(f, "work duration"),
            DurationSetting::ShortBreak => write!(f, "short break duration"),
            DurationSetting::LongBreak => write!(f, "long break duration"),
        }
    }
}

/// Errors raised when a [`PomatoConfig`](super::PomatoConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A phase duration was zero.
    #[error("{setting} must be at least 1 minute")]
    ZeroDuration {
        /// The offending setting
        setting: DurationSetting,
    },

    /// The long break would never be reached.
    #[error("intervals before a long break must be at least 1")]
    ZeroIntervals,
}

impl ConfigError {
    /// Returns the command-line flag that controls the rejected setting.
    #[must_use]
    pub fn flag(&self) -> &'static str {
        match self {
            Self::ZeroDuration { setting } => setting.flag(),
            Self::ZeroIntervals => "--intervals",
        }
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> String {
        format!("pass a positive value to {}", self.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroDuration {
            setting: DurationSetting::Work,
        };
        assert_eq!(err.to_string(), "work duration must be at least 1 minute");

        let err = ConfigError::ZeroDuration {
            setting: DurationSetting::LongBreak,
        };
        assert_eq!(
            err.to_string(),
            "long break duration must be at least 1 minute"
        );

        let err = ConfigError::ZeroIntervals;
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_flag_follows_setting() {
        let cases = [
            (DurationSetting::Work, "--work"),
            (DurationSetting::ShortBreak, "--short-break"),
            (DurationSetting::LongBreak, "--long-break"),
        ];
        for (setting, flag) in cases {
            assert_eq!(ConfigError::ZeroDuration { setting }.flag(), flag);
        }
        assert_eq!(ConfigError::ZeroIntervals.flag(), "--intervals");
    }

    #[test]
    fn test_suggestion() {
        assert_eq!(
            ConfigError::ZeroDuration {
                setting: DurationSetting::ShortBreak
            }
            .suggestion(),
            "pass a positive value to --short-break"
        );
        assert!(ConfigError::ZeroIntervals.suggestion().contains("--intervals"));
    }
}
