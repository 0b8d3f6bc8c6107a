//! Headless mode.
//!
//! Starts a work interval right away and prints one JSON line per phase
//! change, for status bars and scripts. Notifications are still dispatched.

use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};

use crate::engine::{Clock, TimerEvent, TimerMachine, TICK_INTERVAL};
use crate::notification::NotificationDispatcher;
use crate::types::{DisplayState, Timestamp};

/// One output line.
#[derive(Debug, Serialize)]
pub struct WatchRecord<'a> {
    /// RFC 3339 instant of the change
    pub at: String,
    #[serde(flatten)]
    pub event: &'a TimerEvent,
    pub state: &'a DisplayState,
}

/// Serializes every phase change in `events` as a JSON line.
pub fn render_records(
    at: Timestamp,
    events: &[TimerEvent],
    state: &DisplayState,
) -> Result<Vec<String>> {
    events
        .iter()
        .filter(|event| matches!(event, TimerEvent::PhaseEntered { .. }))
        .map(|event| {
            let record = WatchRecord {
                at: at.to_rfc3339(),
                event,
                state,
            };
            serde_json::to_string(&record).context("Failed to serialize watch record")
        })
        .collect()
}

/// Runs until `shutdown` resolves, then resets the timer and returns.
pub async fn run<C, W, F>(
    mut machine: TimerMachine,
    clock: C,
    dispatcher: NotificationDispatcher,
    mut out: W,
    shutdown: F,
) -> Result<()>
where
    C: Clock,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let now = clock.now();
    let events = machine.start_work(now);
    let at = observed_at(&machine, now);
    emit(&mut out, at, &events, &machine.display_state(at))?;
    dispatcher.dispatch(&events);

    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!("shutting down");
                break;
            }
            _ = ticker.tick() => {
                let now = clock.now();
                let (state, events) = machine.tick(now);
                emit(&mut out, observed_at(&machine, now), &events, &state)?;
                dispatcher.dispatch(&events);
            }
        }
    }

    let now = clock.now();
    let events = machine.reset(now);
    let at = observed_at(&machine, now);
    emit(&mut out, at, &events, &machine.display_state(at))
}

/// The instant the machine last acted on, so `at` agrees with `state`
/// when the wall clock steps backwards.
fn observed_at(machine: &TimerMachine, fallback: Timestamp) -> Timestamp {
    machine.last_observed().unwrap_or(fallback)
}

fn emit<W: Write>(
    out: &mut W,
    at: Timestamp,
    events: &[TimerEvent],
    state: &DisplayState,
) -> Result<()> {
    for line in render_records(at, events, state)? {
        writeln!(out, "{}", line).context("Failed to write watch record")?;
    }
    out.flush().context("Failed to flush output")
}
