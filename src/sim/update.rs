//! Event-driven state transitions
//!
//! `apply` is the only way a `GameState` changes. It never touches a clock,
//! a timer or storage itself: time and randomness come in through `Context`,
//! and everything with a side effect goes out as an `Effect` for the host
//! to carry out.

use rand::Rng;
use rand_pcg::Pcg32;

use super::round::RoundGenerator;
use super::state::{Direction, GameState, Layout, MarkerScope, Mode, RoadMarker, Scene, Side};
use crate::consts::{PROGRESS_FINISH, PROGRESS_FLOOR};
use crate::settings::Settings;

/// Everything that can happen to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Begin a session in the given mode
    StartGame(Mode),
    /// Player clicked a road cell
    ChoosePath { direction: Direction, side: Side },
    /// Periodic progress update
    Tick,
    /// Drop the pass marker of round `round` and roll the next board
    ClearRound { session: u64, round: u32 },
    /// End the between-rounds window and speed up
    StartNextRound { session: u64 },
    /// Back to the title screen
    ResetGame,
    ShowReference,
    ShowAbout,
    /// Store answer to `Effect::LoadHighScore`
    HighScoreLoaded { mode: Mode, score: u32 },
}

/// Side effects for the host to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `event` once after a delay (not cancellable)
    Schedule { after_ms: u64, event: Event },
    /// Dispatch `Event::Tick` periodically (no-op if already running)
    StartTicker { every_ms: u64 },
    /// Cancel the periodic tick (no-op if not running)
    StopTicker,
    /// Read the best score for a mode and answer with `Event::HighScoreLoaded`
    LoadHighScore(Mode),
    /// Persist `score` if it beats the stored best for `mode`
    SaveHighScore { mode: Mode, score: u32 },
}

/// Inputs a transition may consult besides the state itself
pub struct Context<'a, R = Pcg32> {
    /// Current clock reading in milliseconds
    pub now_ms: u64,
    pub rounds: &'a mut RoundGenerator<R>,
    pub settings: &'a Settings,
}

type Transition = (GameState, Vec<Effect>);

/// Whether a choice is the right turn on the right side of the road
pub fn is_correct(layout: &Layout, instruction: Direction, direction: Direction, side: Side) -> bool {
    direction == instruction && side == layout.side(instruction)
}

/// Apply one event, producing the next state and the effects it requests
///
/// Events that mean nothing in the current state return it unchanged with no
/// effects. Ticker start/stop effects are derived from whether the state
/// wants ticking before and after the event.
pub fn apply<R: Rng>(state: &GameState, event: Event, ctx: &mut Context<'_, R>) -> Transition {
    let handled = match event {
        Event::StartGame(mode) => start_game(state, mode, ctx),
        Event::ChoosePath { direction, side } => choose_path(state, direction, side, ctx),
        Event::Tick => tick(state, ctx),
        Event::ClearRound { session, round } => clear_round(state, session, round, ctx),
        Event::StartNextRound { session } => start_next_round(state, session, ctx),
        Event::ResetGame => Some((GameState::home(), Vec::new())),
        Event::ShowReference => show_scene(state, Scene::Reference),
        Event::ShowAbout => show_scene(state, Scene::About),
        Event::HighScoreLoaded { mode, score } => high_score_loaded(state, mode, score),
    };

    let Some((next, mut effects)) = handled else {
        log::trace!("Ignoring {:?} in {:?}", event, state.scene);
        return (state.clone(), Vec::new());
    };

    match (state.wants_tick(), next.wants_tick()) {
        (false, true) => effects.push(Effect::StartTicker {
            every_ms: ctx.settings.tick_interval_ms,
        }),
        (true, false) => effects.push(Effect::StopTicker),
        _ => {}
    }

    (next, effects)
}

fn start_game<R: Rng>(state: &GameState, mode: Mode, ctx: &mut Context<'_, R>) -> Option<Transition> {
    let can_start = match state.scene {
        Scene::Home | Scene::Reference | Scene::About => true,
        Scene::Playing => state.is_failed(),
    };
    if !can_start {
        return None;
    }

    log::info!("Starting {} game", mode);
    let next = GameState {
        scene: Scene::Playing,
        session: ctx.rounds.begin_session(),
        mode,
        layout: ctx.rounds.generate_layout(mode),
        instruction: ctx.rounds.generate_instruction(),
        progress: 0.0,
        velocity: ctx.settings.base_velocity(mode),
        last_tick_ms: ctx.now_ms,
        road_marker: None,
        score: 0,
        high_score: 0,
        transitioning: false,
        ..state.clone()
    };
    Some((next, vec![Effect::LoadHighScore(mode)]))
}

fn choose_path<R: Rng>(
    state: &GameState,
    direction: Direction,
    side: Side,
    ctx: &mut Context<'_, R>,
) -> Option<Transition> {
    if state.scene != Scene::Playing || state.road_marker.is_some() {
        return None;
    }

    if !is_correct(&state.layout, state.instruction, direction, side) {
        log::debug!("Wrong way: {} on the {} (score {})", direction, side, state.score);
        return Some(fail(state, MarkerScope::Cell { direction, side }));
    }

    let score = state.score + 1;
    log::debug!("Pass: {} on the {} (score {})", direction, side, score);
    let next = GameState {
        score,
        high_score: state.high_score.max(score),
        road_marker: Some(RoadMarker::pass(direction, side)),
        ..state.clone()
    };
    let session = state.session;
    let effects = vec![
        Effect::Schedule {
            after_ms: ctx.settings.clear_delay_ms,
            event: Event::ClearRound { session, round: score },
        },
        Effect::Schedule {
            after_ms: ctx.settings.next_round_delay_ms,
            event: Event::StartNextRound { session },
        },
    ];
    Some((next, effects))
}

fn tick<R: Rng>(state: &GameState, ctx: &mut Context<'_, R>) -> Option<Transition> {
    if !state.wants_tick() {
        return None;
    }

    // A clock that runs backwards counts as no time passing
    let elapsed = ctx.now_ms.saturating_sub(state.last_tick_ms) as f64;
    let progress = (state.progress + elapsed * state.velocity).max(PROGRESS_FLOOR);

    if progress >= PROGRESS_FINISH {
        log::debug!("Timed out (score {})", state.score);
        let arrived = GameState {
            progress: PROGRESS_FINISH,
            ..state.clone()
        };
        return Some(fail(&arrived, MarkerScope::All));
    }

    let next = GameState {
        progress,
        last_tick_ms: ctx.now_ms,
        ..state.clone()
    };
    Some((next, Vec::new()))
}

fn clear_round<R: Rng>(
    state: &GameState,
    session: u64,
    round: u32,
    ctx: &mut Context<'_, R>,
) -> Option<Transition> {
    // Only the marker of the pass that scheduled this event may be cleared
    if state.scene != Scene::Playing
        || state.session != session
        || state.score != round
        || !state.is_passing()
    {
        return None;
    }

    let next = GameState {
        layout: ctx.rounds.generate_layout(state.mode),
        instruction: ctx.rounds.generate_instruction(),
        previous_side: state.layout.side(state.instruction),
        progress: 0.0,
        road_marker: None,
        transitioning: true,
        ..state.clone()
    };
    Some((next, Vec::new()))
}

fn start_next_round<R: Rng>(
    state: &GameState,
    session: u64,
    ctx: &mut Context<'_, R>,
) -> Option<Transition> {
    if state.scene != Scene::Playing
        || state.session != session
        || !state.transitioning
        || state.is_failed()
    {
        return None;
    }

    // The next pass may already be on screen; its marker stays and the ramp still applies
    let next = GameState {
        transitioning: false,
        progress: 0.0,
        velocity: state.velocity + ctx.settings.velocity_step,
        last_tick_ms: ctx.now_ms,
        ..state.clone()
    };
    Some((next, Vec::new()))
}

fn show_scene(state: &GameState, scene: Scene) -> Option<Transition> {
    if state.scene != Scene::Home {
        return None;
    }
    Some((GameState { scene, ..state.clone() }, Vec::new()))
}

fn high_score_loaded(state: &GameState, mode: Mode, score: u32) -> Option<Transition> {
    if state.scene != Scene::Playing || state.mode != mode {
        return None;
    }
    let next = GameState {
        high_score: score.max(state.score),
        ..state.clone()
    };
    Some((next, Vec::new()))
}

/// End the session with a fail marker and ask for the best score to be saved
fn fail(state: &GameState, scope: MarkerScope) -> Transition {
    log::info!("Game over in {} mode with score {}", state.mode, state.score);
    let next = GameState {
        road_marker: Some(RoadMarker::fail(scope)),
        ..state.clone()
    };
    let effects = vec![Effect::SaveHighScore {
        mode: state.mode,
        score: state.score,
    }];
    (next, effects)
}
