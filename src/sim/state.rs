//! Game state and core round types
//!
//! Everything the presentation layer reads lives here. States are values:
//! transitions build a new `GameState` rather than mutating a shared one.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Side of the road a lane sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Direction the player can steer toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Forward, Direction::Left, Direction::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "forward" | "straight" => Some(Direction::Forward),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Difficulty tier, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Medium, Mode::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Mode::Easy),
            "medium" | "med" => Some(Mode::Medium),
            "hard" => Some(Mode::Hard),
            _ => None,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Side, Direction, Mode);

/// Coarse UI mode; decides which events mean anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    /// Title screen with mode buttons
    Home,
    /// A session is running (or just failed)
    Playing,
    /// Country driving-side table
    Reference,
    /// Credits
    About,
}

/// A labelled image shown next to a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub label: String,
    pub url: String,
}

impl Icon {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Road layout for one round: a side and an icon per direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub forward: Side,
    pub forward_icon: Icon,

    pub left: Side,
    pub left_icon: Icon,

    pub right: Side,
    pub right_icon: Icon,
}

impl Layout {
    /// The side of the road the given direction must be driven on
    pub fn side(&self, direction: Direction) -> Side {
        match direction {
            Direction::Forward => self.forward,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn icon(&self, direction: Direction) -> &Icon {
        match direction {
            Direction::Forward => &self.forward_icon,
            Direction::Left => &self.left_icon,
            Direction::Right => &self.right_icon,
        }
    }

    /// Layout shown on the title screen, before any round is rolled
    pub fn home() -> Self {
        let icon = Icon::new("Left", LEFT_ICON_URL);
        Self {
            forward: Side::Left,
            forward_icon: icon.clone(),
            left: Side::Left,
            left_icon: icon.clone(),
            right: Side::Left,
            right_icon: icon,
        }
    }
}

/// Outcome shown by a road marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Pass,
    Fail,
}

/// Which road cells a marker covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerScope {
    /// Every cell (timeout)
    All,
    /// A single (direction, side) cell
    Cell { direction: Direction, side: Side },
}

impl MarkerScope {
    pub fn covers(&self, direction: Direction, side: Side) -> bool {
        match *self {
            MarkerScope::All => true,
            MarkerScope::Cell { direction: d, side: s } => d == direction && s == side,
        }
    }
}

/// Feedback overlay between a choice (or timeout) and the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadMarker {
    pub kind: MarkerKind,
    pub scope: MarkerScope,
}

impl RoadMarker {
    pub fn pass(direction: Direction, side: Side) -> Self {
        Self {
            kind: MarkerKind::Pass,
            scope: MarkerScope::Cell { direction, side },
        }
    }

    pub fn fail(scope: MarkerScope) -> Self {
        Self {
            kind: MarkerKind::Fail,
            scope,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub scene: Scene,
    /// Session number, stamped on delayed round events (0 on the title screen)
    pub session: u64,
    /// Difficulty picked at game start
    pub mode: Mode,
    pub layout: Layout,
    /// Direction the player must take this round
    pub instruction: Direction,
    /// Lane the car renders in, carried over from the last finished round
    pub previous_side: Side,
    /// How far the car has come, 0..=100
    pub progress: f64,
    /// Progress gained per millisecond
    pub velocity: f64,
    /// Clock reading (ms) of the last progress update
    pub last_tick_ms: u64,
    pub road_marker: Option<RoadMarker>,
    /// Rounds passed this session
    pub score: u32,
    /// Best score recorded for `mode`
    pub high_score: u32,
    /// Cosmetic reset window between rounds
    pub transitioning: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::home()
    }
}

impl GameState {
    /// The canonical title-screen state
    pub fn home() -> Self {
        Self {
            scene: Scene::Home,
            session: 0,
            mode: Mode::Easy,
            layout: Layout::home(),
            instruction: Direction::Forward,
            previous_side: Side::Right,
            progress: HOME_PROGRESS,
            velocity: 0.0,
            last_tick_ms: 0,
            road_marker: None,
            score: 0,
            high_score: 0,
            transitioning: false,
        }
    }

    /// Session ended on a wrong turn or a timeout
    pub fn is_failed(&self) -> bool {
        matches!(self.road_marker, Some(RoadMarker { kind: MarkerKind::Fail, .. }))
    }

    /// Showing the pass marker of a correct choice
    pub fn is_passing(&self) -> bool {
        matches!(self.road_marker, Some(RoadMarker { kind: MarkerKind::Pass, .. }))
    }

    /// Whether the periodic tick should be running for this state
    pub fn wants_tick(&self) -> bool {
        self.scene == Scene::Playing && self.road_marker.is_none()
    }

    /// Marker kind to draw on a road cell, if any
    pub fn marker_at(&self, direction: Direction, side: Side) -> Option<MarkerKind> {
        self.road_marker
            .filter(|m| m.scope.covers(direction, side))
            .map(|m| m.kind)
    }

    /// Lane the car sprite renders in
    pub fn car_lane(&self) -> Side {
        self.previous_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_state_is_idle() {
        let state = GameState::home();
        assert_eq!(state.scene, Scene::Home);
        assert_eq!(state.score, 0);
        assert!(state.road_marker.is_none());
        assert!(!state.wants_tick());
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_marker_scope_cell() {
        let mut state = GameState::home();
        state.road_marker = Some(RoadMarker::pass(Direction::Left, Side::Right));
        assert_eq!(state.marker_at(Direction::Left, Side::Right), Some(MarkerKind::Pass));
        assert_eq!(state.marker_at(Direction::Left, Side::Left), None);
        assert_eq!(state.marker_at(Direction::Forward, Side::Right), None);
        assert!(state.is_passing());
        assert!(!state.is_failed());
    }

    #[test]
    fn test_marker_scope_all() {
        let mut state = GameState::home();
        state.road_marker = Some(RoadMarker::fail(MarkerScope::All));
        for dir in Direction::ALL {
            for side in Side::ALL {
                assert_eq!(state.marker_at(dir, side), Some(MarkerKind::Fail));
            }
        }
        assert!(state.is_failed());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Mode::from_str("Med"), Some(Mode::Medium));
        assert_eq!(Direction::from_str("straight"), Some(Direction::Forward));
        assert_eq!(Side::from_str("RIGHT"), Some(Side::Right));
        assert_eq!(Side::from_str("up"), None);
    }

    #[test]
    fn test_state_json_shape() {
        let json = serde_json::to_value(GameState::home()).unwrap();
        assert_eq!(json["scene"], "home");
        assert_eq!(json["mode"], "easy");
        assert_eq!(json["previous_side"], "right");
        assert!(json["road_marker"].is_null());
    }
}
