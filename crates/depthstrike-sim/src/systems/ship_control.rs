//! Ship steering system: applies held move keys and clamps to the lane.

use hecs::{Entity, World};

use depthstrike_core::components::Speed;
use depthstrike_core::constants::{SHIP_MAX_X, SHIP_MIN_X};
use depthstrike_core::types::Position;

use crate::session::InputState;

/// Move the ship left and/or right by its speed, then clamp x.
/// Left and right held together cancel out.
pub fn run(world: &mut World, ship: Entity, input: &InputState) {
    let Ok((pos, speed)) = world.query_one_mut::<(&mut Position, &Speed)>(ship) else {
        return;
    };

    if input.move_left {
        pos.x -= speed.0;
    }
    if input.move_right {
        pos.x += speed.0;
    }
    pos.x = pos.x.clamp(SHIP_MIN_X, SHIP_MAX_X);
}
