//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::color::ShipColor;
use crate::enums::{Key, VisualMode};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// A key went down. For `Key::Fire` only the press edge fires a bullet;
    /// repeated key-down events while the key is held are ignored.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },

    // --- Start screen configuration ---
    /// Pick the ship color for the next session.
    SetShipColor { color: ShipColor },
    /// Pick the visual fidelity for the next session.
    SetVisualMode { mode: VisualMode },

    // --- Session control ---
    /// Leave the start screen and begin a session.
    StartGame,
    /// Leave the game-over screen and return to the start screen.
    RestartGame,
}

impl PlayerCommand {
    /// Translate a raw host key event. Unmapped keys yield `None`.
    pub fn from_key_event(name: &str, pressed: bool) -> Option<Self> {
        let key = Key::from_key_name(name)?;
        Some(if pressed {
            PlayerCommand::KeyDown { key }
        } else {
            PlayerCommand::KeyUp { key }
        })
    }
}
