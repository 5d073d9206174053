//! Kinematic advance for bullets and enemies.
//!
//! Each tick moves bullets toward -z and enemies toward +z by their speed.
//! Entities that leave the playfield are pushed to the despawn buffer;
//! nothing is removed here.

use hecs::{Entity, World};

use depthstrike_core::components::{Bullet, Enemy, Hitbox, SpawnSeq, Speed, Spin};
use depthstrike_core::constants::{BULLET_DESPAWN_Z, ENEMY_DESPAWN_Z};
use depthstrike_core::geometry::Aabb;
use depthstrike_core::types::Position;

/// Advance every bullet and mark the ones past the far boundary.
pub fn advance_bullets(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (_bullet, pos, speed)) in world.query_mut::<(&Bullet, &mut Position, &Speed)>() {
        pos.z -= speed.0;
        if pos.z < BULLET_DESPAWN_Z {
            despawn_buffer.push(entity);
        }
    }
}

/// Advance enemies in creation order.
///
/// Each enemy is tested against the ship box after it moves and before it
/// is checked against the near boundary. The first enemy that touches the
/// ship stops the pass and is returned; enemies after it are not moved.
pub fn advance_enemies(
    world: &mut World,
    ship_box: Option<&Aabb>,
    despawn_buffer: &mut Vec<Entity>,
) -> Option<Entity> {
    let mut order: Vec<(SpawnSeq, Entity)> = world
        .query_mut::<(&Enemy, &SpawnSeq)>()
        .into_iter()
        .map(|(entity, (_enemy, seq))| (*seq, entity))
        .collect();
    order.sort_unstable_by_key(|(seq, _)| *seq);

    for (_, entity) in order {
        let Ok((pos, speed, hitbox, spin)) =
            world.query_one_mut::<(&mut Position, &Speed, &Hitbox, Option<&mut Spin>)>(entity)
        else {
            continue;
        };

        pos.z += speed.0;
        if let Some(spin) = spin {
            spin.angle_x += spin.rate;
            spin.angle_y += spin.rate;
        }

        if let Some(ship_box) = ship_box {
            if hitbox.0.translated(pos).intersects(ship_box) {
                return Some(entity);
            }
        }

        if pos.z > ENEMY_DESPAWN_Z {
            despawn_buffer.push(entity);
        }
    }

    None
}
