//! Browser bindings
//!
//! A JS presentation layer drives the game through `WebGame`: it forwards
//! clicks, calls `pump` every animation frame and renders `state_json`.

use wasm_bindgen::prelude::*;

use super::Clock;
use crate::highscores::{HighScoreStore, parse_score, storage_key};
use crate::runtime::Runtime;
use crate::settings::Settings;
use crate::sim::{Direction, Event, Mode, Side};

/// Wall clock backed by `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// High scores in `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    namespace: String,
}

impl LocalStorageStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn get(&self, mode: Mode) -> u32 {
        let raw = Self::storage()
            .and_then(|s| s.get_item(&storage_key(&self.namespace, mode)).ok())
            .flatten();
        parse_score(raw.as_deref())
    }

    fn set(&mut self, mode: Mode, score: u32) {
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(&storage_key(&self.namespace, mode), &score.to_string())
                .is_err()
            {
                log::warn!("Could not save {} high score", mode);
            }
        }
    }
}

/// Game handle exported to JS
#[wasm_bindgen]
pub struct WebGame {
    runtime: Runtime<LocalStorageStore, BrowserClock>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let settings = Settings::load();
        let store = LocalStorageStore::new(settings.high_score_namespace.clone());
        let seed = js_sys::Date::now() as u64;
        let runtime = Runtime::standard(settings, store, BrowserClock, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self { runtime })
    }

    /// Start a session; unknown mode names are ignored
    pub fn start_game(&mut self, mode: &str) {
        match Mode::from_str(mode) {
            Some(mode) => self.runtime.dispatch(Event::StartGame(mode)),
            None => log::warn!("Unknown mode {:?}", mode),
        }
    }

    pub fn choose_path(&mut self, direction: &str, side: &str) {
        match (Direction::from_str(direction), Side::from_str(side)) {
            (Some(direction), Some(side)) => {
                self.runtime.dispatch(Event::ChoosePath { direction, side })
            }
            _ => log::warn!("Unknown road cell {:?}/{:?}", direction, side),
        }
    }

    pub fn show_reference(&mut self) {
        self.runtime.dispatch(Event::ShowReference);
    }

    pub fn show_about(&mut self) {
        self.runtime.dispatch(Event::ShowAbout);
    }

    pub fn reset(&mut self) {
        self.runtime.dispatch(Event::ResetGame);
    }

    /// Fire due timers; call once per animation frame
    pub fn pump(&mut self) -> usize {
        self.runtime.pump()
    }

    /// Current state for rendering
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.runtime.state()).unwrap_or_default()
    }
}

/// Module entry point: logging and panic reporting
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Re:Turn starting...");
}
