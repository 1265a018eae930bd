//! Re:Turn - a reaction game about the correct side of the road
//!
//! Each round asks the player to turn forward, left or right, and to pick
//! the side of the road that turn drives on, before the oncoming car arrives.
//!
//! Core modules:
//! - `sim`: Deterministic rules (state, round generation, transitions)
//! - `content`: Icon pools per difficulty and the driving-side table
//! - `highscores`: Best score per mode
//! - `settings`: Data-driven speeds and delays
//! - `runtime`: Effect interpreter that owns timers, clock and storage
//! - `platform`: Clock sources and browser bindings

pub mod content;
pub mod highscores;
pub mod platform;
pub mod runtime;
pub mod settings;
pub mod sim;

pub use content::{ContentError, ContentLibrary};
pub use highscores::{HighScoreStore, MemoryStore};
pub use runtime::{Runtime, StartupError};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Progress a tick can never drop below
    pub const PROGRESS_FLOOR: f64 = 1.0;
    /// Progress at which the car arrives and the round times out
    pub const PROGRESS_FINISH: f64 = 100.0;
    /// Car position on the title screen
    pub const HOME_PROGRESS: f64 = 0.5;

    /// Default prefix for high score storage keys
    pub const HIGH_SCORE_NAMESPACE: &str = "high_score";

    pub const LEFT_ICON_URL: &str = "./left.svg";
    pub const RIGHT_ICON_URL: &str = "./right.svg";
}
