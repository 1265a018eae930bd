//! Re:Turn entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively there
//! is no renderer, so this runs a headless session with a scripted driver on a
//! manual clock and logs how it went.
//!
//! Usage: `re-turn [easy|medium|hard] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use re_turn::platform::{Clock, ManualClock};
    use re_turn::sim::{Event, Mode, Side};
    use re_turn::{MemoryStore, Runtime, Settings};

    /// How long the driver takes to react to a new board
    const REACTION_MS: u64 = 400;
    /// Frame step for pumping the runtime
    const FRAME_MS: u64 = 16;
    /// Chance the driver picks the wrong side of the road
    const MISTAKE_CHANCE: f64 = 0.05;

    env_logger::init();
    log::info!("Re:Turn (native) starting...");

    let mut args = std::env::args().skip(1);
    let mode = args
        .next()
        .and_then(|m| Mode::from_str(&m))
        .unwrap_or_default();
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    let settings = Settings::load();
    let store = MemoryStore::new(settings.high_score_namespace.clone());
    let clock = ManualClock::new(0);
    let mut runtime = match Runtime::standard(settings, store, clock.clone(), seed) {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Headless {} session with seed: {}", mode, seed);

    let mut driver = Pcg32::seed_from_u64(seed ^ 0x5EED);
    runtime.dispatch(Event::StartGame(mode));

    let mut waited = 0;
    while !runtime.state().is_failed() {
        clock.advance(FRAME_MS);
        runtime.pump();
        let state = runtime.state();
        if !state.wants_tick() || state.transitioning {
            waited = 0;
            continue;
        }

        waited += FRAME_MS;
        if waited < REACTION_MS {
            continue;
        }

        let direction = state.instruction;
        let mut side = state.layout.side(direction);
        if driver.random_bool(MISTAKE_CHANCE) {
            side = match side {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
            };
        }
        log::debug!(
            "Round {}: {} on the {} ({})",
            state.score + 1,
            direction,
            side,
            state.layout.icon(direction).label
        );
        runtime.dispatch(Event::ChoosePath { direction, side });
        waited = 0;
    }

    let state = runtime.state();
    log::info!(
        "Finished after {:.1}s: score {}, best {}",
        clock.now_ms() as f64 / 1000.0,
        state.score,
        state.high_score
    );
    println!("{} mode: score {}", mode, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
