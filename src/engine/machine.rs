//! Timer state machine.
//!
//! This module provides the core timer functionality:
//! - Phase transitions (Idle → Work → ShortBreak/LongBreak → Work …)
//! - Countdown against an absolute deadline
//! - Events describing phase entries and requested notifications
//! - Long break after a configurable number of work intervals

use serde::{Deserialize, Serialize};

use crate::types::{
    ClockFace, ConfigError, DisplayState, Phase, PomatoConfig, Timestamp, NOTIFICATION_TITLE,
};

// ============================================================================
// TimerEvent
// ============================================================================

/// Something the host should react to after a machine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// The machine moved into `phase`
    PhaseEntered {
        /// Phase now active
        phase: Phase,
    },
    /// A user-facing notification should be shown
    NotifyRequested {
        /// Notification title
        title: String,
        /// Notification body
        message: String,
    },
}

impl TimerEvent {
    fn notify(message: &str) -> Self {
        TimerEvent::NotifyRequested {
            title: NOTIFICATION_TITLE.to_string(),
            message: message.to_string(),
        }
    }
}

/// Where a phase leads once its deadline passes, and the counter to carry.
fn next_on_deadline(phase: Phase, completed: u32, intervals: u32) -> Option<(Phase, u32)> {
    match phase {
        Phase::Idle => None,
        Phase::Work => {
            let completed = completed + 1;
            if completed >= intervals {
                Some((Phase::LongBreak, completed))
            } else {
                Some((Phase::ShortBreak, completed))
            }
        }
        Phase::ShortBreak => Some((Phase::Work, completed)),
        Phase::LongBreak => Some((Phase::Work, 0)),
    }
}

// ============================================================================
// TimerMachine
// ============================================================================

/// Pomodoro state machine driven by externally sampled wall-clock time.
#[derive(Debug, Clone)]
pub struct TimerMachine {
    config: PomatoConfig,
    phase: Phase,
    /// `None` exactly when idle.
    deadline: Option<Timestamp>,
    completed_work_intervals: u32,
    last_observed: Option<Timestamp>,
}

impl TimerMachine {
    /// Creates an idle machine.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: PomatoConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            phase: Phase::Idle,
            deadline: None,
            completed_work_intervals: 0,
            last_observed: None,
        })
    }

    /// Advances the machine to `now`.
    ///
    /// Fires at most one transition: the new deadline is always later than
    /// the instant it was computed from.
    pub fn tick(&mut self, now: Timestamp) -> (DisplayState, Vec<TimerEvent>) {
        let now = self.observe(now);
        let mut events = Vec::new();

        if let Some(deadline) = self.deadline {
            if now >= deadline {
                if let Some((next, completed)) = next_on_deadline(
                    self.phase,
                    self.completed_work_intervals,
                    self.config.intervals_before_long_break,
                ) {
                    self.completed_work_intervals = completed;
                    events = self.enter(next, now);
                }
            }
        }

        (self.display_state(now), events)
    }

    /// Starts a work interval, or cancels back to idle if a phase is running.
    pub fn start_work(&mut self, now: Timestamp) -> Vec<TimerEvent> {
        let now = self.observe(now);

        if self.phase.is_active() {
            tracing::debug!(phase = self.phase.as_str(), "start pressed while running, cancelling");
            return self.enter(Phase::Idle, now);
        }

        self.enter(Phase::Work, now)
    }

    /// Returns to idle, clearing the interval counter and any countdown.
    pub fn reset(&mut self, now: Timestamp) -> Vec<TimerEvent> {
        let now = self.observe(now);

        if self.phase == Phase::Idle {
            self.completed_work_intervals = 0;
            return Vec::new();
        }

        self.enter(Phase::Idle, now)
    }

    /// Whole seconds until the deadline, never negative; zero while idle.
    pub fn remaining_seconds(&self, now: Timestamp) -> u64 {
        let now = self.clamped(now);
        self.deadline
            .map(|deadline| (deadline - now).num_seconds().max(0) as u64)
            .unwrap_or(0)
    }

    /// Returns the current phase.
    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    /// Returns the number of work intervals finished since the last reset.
    pub fn completed_work_intervals(&self) -> u32 {
        self.completed_work_intervals
    }

    /// Returns the active countdown deadline, `None` while idle.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Returns the latest instant the machine has acted on, after clamping.
    pub fn last_observed(&self) -> Option<Timestamp> {
        self.last_observed
    }

    /// Returns the configuration the machine was built with.
    pub fn config(&self) -> &PomatoConfig {
        &self.config
    }

    /// Snapshot for the presentation layer, without advancing the machine.
    pub fn display_state(&self, now: Timestamp) -> DisplayState {
        let now = self.clamped(now);
        DisplayState {
            phase: self.phase,
            remaining_seconds: self
                .phase
                .is_active()
                .then(|| self.remaining_seconds(now)),
            clock: ClockFace::at(&now),
            completed_work_intervals: self.completed_work_intervals,
        }
    }

    /// Enters `phase`, recomputing the deadline and describing the change.
    fn enter(&mut self, phase: Phase, now: Timestamp) -> Vec<TimerEvent> {
        self.phase = phase;
        self.deadline = phase.duration(&self.config).map(|length| now + length);
        if phase == Phase::Idle {
            self.completed_work_intervals = 0;
        }

        tracing::info!(
            phase = phase.as_str(),
            completed = self.completed_work_intervals,
            "phase entered"
        );

        let mut events = vec![TimerEvent::PhaseEntered { phase }];
        if let Some(message) = phase.announcement() {
            events.push(TimerEvent::notify(message));
        }
        events
    }

    /// Clamps `now` to the latest instant seen and records it.
    fn observe(&mut self, now: Timestamp) -> Timestamp {
        let clamped = self.clamped(now);
        if clamped != now {
            tracing::debug!(%now, %clamped, "clock went backwards, clamping");
        }
        self.last_observed = Some(clamped);
        clamped
    }

    fn clamped(&self, now: Timestamp) -> Timestamp {
        match self.last_observed {
            Some(last) if last > now => last,
            _ => now,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
