//! Effect interpreter
//!
//! Owns the current state plus everything `sim` is not allowed to touch:
//! the clock, pending timers, the periodic tick and the high score store.
//! Hosts feed it player events with `dispatch` and call `pump` from their
//! frame loop to fire whatever timers have come due.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::content::{ContentError, ContentLibrary};
use crate::highscores::HighScoreStore;
use crate::platform::Clock;
use crate::settings::{Settings, SettingsError};
use crate::sim::{Context, Effect, Event, GameState, RoundGenerator, apply};

/// Reasons a runtime refuses to start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// A one-shot delayed event
#[derive(Debug, Clone, Copy)]
struct Timer {
    due_ms: u64,
    /// Insertion order, breaks ties between equal due times
    seq: u64,
    event: Event,
}

/// The periodic tick source
#[derive(Debug, Clone, Copy)]
struct Ticker {
    every_ms: u64,
    next_due_ms: u64,
}

/// Runs the state machine against real (or manual) time and storage
pub struct Runtime<S, C, R = Pcg32> {
    state: GameState,
    rounds: RoundGenerator<R>,
    settings: Settings,
    store: S,
    clock: C,
    timers: Vec<Timer>,
    ticker: Option<Ticker>,
    next_seq: u64,
}

impl<S: HighScoreStore, C: Clock> Runtime<S, C, Pcg32> {
    /// Runtime with the stock content library and a seeded generator
    pub fn standard(settings: Settings, store: S, clock: C, seed: u64) -> Result<Self, StartupError> {
        let rounds = RoundGenerator::seeded(ContentLibrary::standard()?, seed);
        Ok(Self::new(settings, rounds, store, clock)?)
    }
}

impl<S: HighScoreStore, C: Clock, R: Rng> Runtime<S, C, R> {
    /// Rejects settings that could never run, e.g. a zero tick interval
    pub fn new(
        settings: Settings,
        rounds: RoundGenerator<R>,
        store: S,
        clock: C,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            state: GameState::home(),
            rounds,
            settings,
            store,
            clock,
            timers: Vec::new(),
            ticker: None,
            next_seq: 0,
        })
    }

    /// Current state, read-only
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of one-shot timers still waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Apply an event now
    pub fn dispatch(&mut self, event: Event) {
        let now = self.clock.now_ms();
        self.run_at(event, now);
    }

    /// Fire every timer and tick due by now, in due order. Returns how many fired.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut fired = 0;

        while let Some((due, event)) = self.take_due(now) {
            self.run_at(event, due);
            fired += 1;
        }
        fired
    }

    /// Pop the earliest event due at or before `now`; one-shots win ties with the ticker
    fn take_due(&mut self, now: u64) -> Option<(u64, Event)> {
        let timer_idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i);
        let ticker_due = self.ticker.map(|t| t.next_due_ms).filter(|&due| due <= now);

        match (timer_idx, ticker_due) {
            (Some(i), tick_due) if tick_due.is_none_or(|d| self.timers[i].due_ms <= d) => {
                let timer = self.timers.swap_remove(i);
                Some((timer.due_ms, timer.event))
            }
            (_, Some(due)) => {
                let ticker = self.ticker.as_mut()?;
                // Late by more than a period: realign instead of replaying the backlog
                ticker.next_due_ms = if now - due > ticker.every_ms {
                    now
                } else {
                    due + ticker.every_ms
                };
                Some((due, Event::Tick))
            }
            _ => None,
        }
    }

    /// Apply an event at a given time along with any events its effects answer immediately
    fn run_at(&mut self, event: Event, now: u64) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let mut ctx = Context {
                now_ms: now,
                rounds: &mut self.rounds,
                settings: &self.settings,
            };
            let (next, effects) = apply(&self.state, event, &mut ctx);
            self.state = next;

            for effect in effects {
                self.perform(effect, now, &mut queue);
            }
        }
    }

    fn perform(&mut self, effect: Effect, now: u64, queue: &mut VecDeque<Event>) {
        match effect {
            Effect::Schedule { after_ms, event } => {
                self.timers.push(Timer {
                    due_ms: now + after_ms,
                    seq: self.next_seq,
                    event,
                });
                self.next_seq += 1;
            }
            Effect::StartTicker { every_ms } => {
                if self.ticker.is_none() {
                    log::trace!("Ticker started ({}ms)", every_ms);
                    self.ticker = Some(Ticker {
                        every_ms,
                        next_due_ms: now + every_ms,
                    });
                }
            }
            Effect::StopTicker => {
                if self.ticker.take().is_some() {
                    log::trace!("Ticker stopped");
                }
            }
            Effect::LoadHighScore(mode) => {
                let score = self.store.get(mode);
                queue.push_back(Event::HighScoreLoaded { mode, score });
            }
            Effect::SaveHighScore { mode, score } => {
                self.store.save_if_higher(mode, score);
            }
        }
    }
}
