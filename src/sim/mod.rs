//! Deterministic game core
//!
//! All rules live here. This module must stay pure:
//! - Time arrives through `Context::now_ms` only
//! - Randomness comes from the injected round generator only
//! - Timers and storage are requested as `Effect`s, never performed

pub mod round;
pub mod state;
pub mod update;

pub use round::RoundGenerator;
pub use state::{
    Direction, GameState, Icon, Layout, MarkerKind, MarkerScope, Mode, RoadMarker, Scene, Side,
};
pub use update::{Context, Effect, Event, apply, is_correct};
