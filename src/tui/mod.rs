//! Interactive full-screen clock.
//!
//! - `app`: Timer host state and key bindings
//! - `ui`: Rendering of the current [`DisplayState`](crate::types::DisplayState)

pub mod app;
pub mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::{interval, MissedTickBehavior};

use crate::engine::{Clock, SystemClock, TimerMachine, TICK_INTERVAL};
use crate::notification::NotificationDispatcher;

pub use app::{App, Command};

/// Takes over the terminal and runs the clock until the user quits.
pub async fn run(machine: TimerMachine, dispatcher: NotificationDispatcher) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut app = App::new(machine, SystemClock);
    let result = run_app(&mut terminal, &mut app, &dispatcher).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
    dispatcher: &NotificationDispatcher,
) -> Result<()> {
    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut input = EventStream::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let events = app.on_tick();
                dispatcher.dispatch(&events);
            }
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    let events = app.on_key(key);
                    dispatcher.dispatch(&events);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal input"),
                None => return Ok(()),
            },
        }

        if app.should_quit() {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}
