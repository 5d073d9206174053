//! Input drivers for headless play.

use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::enums::Key;
use depthstrike_core::state::{EnemyView, GameStateSnapshot};

/// Produces player commands from the latest snapshot.
pub trait InputDriver {
    fn drive(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand>;
}

impl<F> InputDriver for F
where
    F: FnMut(&GameStateSnapshot) -> Vec<PlayerCommand>,
{
    fn drive(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        self(snapshot)
    }
}

/// Lateral distance at which the autopilot considers itself lined up.
const AIM_TOLERANCE: f64 = 0.4;

/// Steers under the closest incoming enemy and taps fire while lined up.
#[derive(Debug, Default)]
pub struct Autopilot {
    steering: Option<Key>,
    fire_held: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The enemy nearest the ship that is still in front of it.
    fn target<'a>(snapshot: &'a GameStateSnapshot, ship_z: f64) -> Option<&'a EnemyView> {
        snapshot
            .enemies
            .iter()
            .filter(|e| e.position.z < ship_z)
            .max_by(|a, b| a.position.z.total_cmp(&b.position.z))
    }

    fn steer(&mut self, want: Option<Key>, commands: &mut Vec<PlayerCommand>) {
        if self.steering == want {
            return;
        }
        if let Some(key) = self.steering.take() {
            commands.push(PlayerCommand::KeyUp { key });
        }
        if let Some(key) = want {
            commands.push(PlayerCommand::KeyDown { key });
        }
        self.steering = want;
    }
}

impl InputDriver for Autopilot {
    fn drive(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        let Some(ship) = &snapshot.ship else {
            self.steer(None, &mut commands);
            if std::mem::take(&mut self.fire_held) {
                commands.push(PlayerCommand::KeyUp { key: Key::Fire });
            }
            return commands;
        };

        let target = Self::target(snapshot, ship.position.z);
        let dx = target.map_or(0.0, |t| t.position.x - ship.position.x);
        let want = if dx < -AIM_TOLERANCE {
            Some(Key::MoveLeft)
        } else if dx > AIM_TOLERANCE {
            Some(Key::MoveRight)
        } else {
            None
        };
        self.steer(want, &mut commands);

        // Fire is edge-triggered, so alternate press and release.
        if self.fire_held {
            commands.push(PlayerCommand::KeyUp { key: Key::Fire });
            self.fire_held = false;
        } else if target.is_some() && want.is_none() {
            commands.push(PlayerCommand::KeyDown { key: Key::Fire });
            self.fire_held = true;
        }

        commands
    }
}
