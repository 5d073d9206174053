//! Per-session bookkeeping that lives outside the ECS world.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use depthstrike_core::color::ShipColor;
use depthstrike_core::enums::{Key, VisualMode};

/// Running score and the best score seen so far.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreState {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    /// Raise the high score to the current score if it beats it.
    /// Returns true when a new record was set.
    pub fn settle(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

/// Which keys are currently held down.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

impl InputState {
    /// Mark a key as held. Returns whether it was already held, which
    /// distinguishes a fresh press from key auto-repeat.
    pub fn press(&mut self, key: Key) -> bool {
        std::mem::replace(self.slot(key), true)
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::MoveLeft => self.move_left,
            Key::MoveRight => self.move_right,
            Key::Fire => self.fire,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::MoveLeft => &mut self.move_left,
            Key::MoveRight => &mut self.move_right,
            Key::Fire => &mut self.fire,
        }
    }
}

/// Start-screen choices. Applied when the next session starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSettings {
    pub ship_color: ShipColor,
    pub visual_mode: VisualMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_only_raises() {
        let mut score = ScoreState::with_high_score(10);
        score.score = 4;
        assert!(!score.settle());
        assert_eq!(score.high_score, 10);

        score.score = 11;
        assert!(score.settle());
        assert_eq!(score.high_score, 11);

        score.score = 11;
        assert!(!score.settle(), "ties are not new records");
    }

    #[test]
    fn test_press_reports_repeat() {
        let mut input = InputState::default();
        assert!(!input.press(Key::Fire));
        assert!(input.press(Key::Fire));
        input.release(Key::Fire);
        assert!(!input.is_held(Key::Fire));
        assert!(!input.press(Key::Fire));
    }
}
