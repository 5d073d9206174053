//! Events emitted by the simulation for the presentation layer and the UI.

use serde::{Deserialize, Serialize};

use crate::color::ShipColor;
use crate::components::EnemyLook;
use crate::enums::{EntityKind, ScreenLayout, VisualMode};
use crate::types::Position;

/// Opaque handle the presentation layer uses to track a visual.
/// Stable for the lifetime of the entity it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Everything the presentation layer needs to build a visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Appearance {
    Ship { color: ShipColor, mode: VisualMode },
    Bullet,
    /// `look` is present only in enhanced mode.
    Enemy { look: Option<EnemyLook> },
}

/// Entity lifecycle notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    Spawned {
        handle: VisualHandle,
        kind: EntityKind,
        appearance: Appearance,
        position: Position,
    },
    Despawned {
        handle: VisualHandle,
    },
}

/// Notifications for the UI sink (score text, panels, high score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    ScoreChanged { score: u32 },
    HighScoreChanged { high_score: u32 },
    Layout { layout: ScreenLayout },
    /// The session ended. `new_record` means the high score was raised and
    /// should be persisted.
    GameOver {
        final_score: u32,
        high_score: u32,
        new_record: bool,
    },
}
