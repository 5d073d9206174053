//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{DODECAHEDRON_HALF_EXTENT, ENEMY_POLYHEDRON_RADIUS};

/// Game phase (top-level session state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen. No ship exists.
    #[default]
    Idle,
    /// A session is being played.
    Active,
    /// The ship was hit. Terminal until an explicit restart.
    GameOver,
}

/// Visual fidelity selected on the start screen.
///
/// Only two simulation hooks look at this: enemy spin and the starfield
/// scroll. Everything else is for the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMode {
    /// Flat boxes, no starfield.
    #[default]
    Baseline,
    /// Multi-part ship, spinning polyhedra enemies, scrolling starfield.
    Enhanced,
}

impl VisualMode {
    pub fn is_enhanced(self) -> bool {
        self == VisualMode::Enhanced
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown visual mode {0:?}, expected baseline or enhanced")]
pub struct VisualModeParseError(pub String);

impl std::str::FromStr for VisualMode {
    type Err = VisualModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "prototype" => Ok(VisualMode::Baseline),
            "enhanced" | "full" => Ok(VisualMode::Enhanced),
            _ => Err(VisualModeParseError(s.to_string())),
        }
    }
}

/// Kind of simulated entity, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Bullet,
    Enemy,
}

/// Polyhedron used for an enhanced-mode enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyShape {
    Icosahedron,
    Octahedron,
    Dodecahedron,
}

impl EnemyShape {
    pub const ALL: [EnemyShape; 3] = [
        EnemyShape::Icosahedron,
        EnemyShape::Octahedron,
        EnemyShape::Dodecahedron,
    ];

    /// Half-extent of the rest-pose bounding box for a unit-radius body.
    pub fn half_extent(self) -> f64 {
        match self {
            EnemyShape::Icosahedron | EnemyShape::Octahedron => ENEMY_POLYHEDRON_RADIUS,
            EnemyShape::Dodecahedron => DODECAHEDRON_HALF_EXTENT,
        }
    }
}

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Key {
    /// Map a host key name to a game key. Case-insensitive; unrecognized
    /// names return `None` and are ignored by the caller.
    ///
    /// Hosts feed raw key events through `PlayerCommand::from_key_event`,
    /// which calls this.
    pub fn from_key_name(name: &str) -> Option<Key> {
        if name == " " {
            return Some(Key::Fire);
        }
        match name.to_ascii_lowercase().as_str() {
            "a" => Some(Key::MoveLeft),
            "d" => Some(Key::MoveRight),
            "space" | "spacebar" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Which of the three UI panels are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenLayout {
    /// Start screen over the overlay.
    Start,
    /// Overlay hidden, gameplay visible.
    Playing,
    /// Game-over screen over the overlay.
    GameOver,
}

/// Visibility flags for the start screen, game-over screen and overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelVisibility {
    pub start_screen: bool,
    pub game_over_screen: bool,
    pub overlay: bool,
}

impl ScreenLayout {
    pub fn visibility(self) -> PanelVisibility {
        match self {
            ScreenLayout::Start => PanelVisibility {
                start_screen: true,
                game_over_screen: false,
                overlay: true,
            },
            ScreenLayout::Playing => PanelVisibility {
                start_screen: false,
                game_over_screen: false,
                overlay: false,
            },
            ScreenLayout::GameOver => PanelVisibility {
                start_screen: false,
                game_over_screen: true,
                overlay: true,
            },
        }
    }
}
