//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::components::{EnemyLook, Spin};
use crate::enums::*;
use crate::events::{PresentationEvent, UiEvent, VisualHandle};
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub visual_mode: VisualMode,
    /// Absent on the start screen.
    pub ship: Option<ShipView>,
    /// Bullets in creation order.
    pub bullets: Vec<BulletView>,
    /// Enemies in creation order.
    pub enemies: Vec<EnemyView>,
    pub score: u32,
    pub high_score: u32,
    /// Starfield scroll offset (enhanced mode only, otherwise 0).
    pub starfield_offset: f64,
    /// Presentation events raised since the previous snapshot.
    pub presentation_events: Vec<PresentationEvent>,
    /// UI events raised since the previous snapshot.
    pub ui_events: Vec<UiEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub handle: VisualHandle,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub handle: VisualHandle,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub handle: VisualHandle,
    pub position: Position,
    pub speed: f64,
    pub look: Option<EnemyLook>,
    pub spin: Option<Spin>,
}
