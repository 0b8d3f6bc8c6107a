//! Application state for the interactive clock.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::{Clock, TimerEvent, TimerMachine};
use crate::types::DisplayState;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a work interval, or cancel the running phase
    StartStop,
    /// Back to the idle clock
    Reset,
    /// Leave the program
    Quit,
}

impl Command {
    /// Maps a key press to a command; releases and repeats are ignored.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char(' ') => Some(Self::StartStop),
            KeyCode::Enter => Some(Self::Reset),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Application state
pub struct App<C: Clock> {
    machine: TimerMachine,
    clock: C,
    state: DisplayState,
    should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(machine: TimerMachine, clock: C) -> Self {
        let state = machine.display_state(clock.now());
        Self {
            machine,
            clock,
            state,
            should_quit: false,
        }
    }

    /// Samples the clock and advances the timer.
    pub fn on_tick(&mut self) -> Vec<TimerEvent> {
        let (state, events) = self.machine.tick(self.clock.now());
        self.state = state;
        events
    }

    /// Applies a key press.
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<TimerEvent> {
        let Some(command) = Command::from_key(key) else {
            return Vec::new();
        };

        let now = self.clock.now();
        let events = match command {
            Command::StartStop => self.machine.start_work(now),
            Command::Reset => self.machine.reset(now),
            Command::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        };
        self.state = self.machine.display_state(now);
        events
    }

    /// Latest snapshot to render.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Length of a full cycle, for the interval markers.
    pub fn intervals_before_long_break(&self) -> u32 {
        self.machine.config().intervals_before_long_break
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
