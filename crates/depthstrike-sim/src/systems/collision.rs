//! Bounding-box collision between bullets, enemies and the ship.

use hecs::{Component, Entity, World};

use depthstrike_core::components::{Bullet, Enemy, Hitbox, SpawnSeq};
use depthstrike_core::geometry::Aabb;
use depthstrike_core::types::Position;

/// World-space box of a single entity.
pub fn world_box(world: &World, entity: Entity) -> Option<Aabb> {
    let mut query = world.query_one::<(&Position, &Hitbox)>(entity).ok()?;
    query.get().map(|(pos, hitbox)| hitbox.0.translated(pos))
}

/// World-space boxes of every `T`-tagged entity not already in `excluded`,
/// sorted by creation order.
fn live_boxes<T: Component>(world: &World, excluded: &[Entity]) -> Vec<(Entity, Aabb)> {
    let mut boxes: Vec<(SpawnSeq, Entity, Aabb)> = world
        .query::<(&T, &SpawnSeq, &Position, &Hitbox)>()
        .iter()
        .filter(|(entity, _)| !excluded.contains(entity))
        .map(|(entity, (_, seq, pos, hitbox))| (*seq, entity, hitbox.0.translated(pos)))
        .collect();
    boxes.sort_unstable_by_key(|(seq, _, _)| *seq);
    boxes.into_iter().map(|(_, entity, aabb)| (entity, aabb)).collect()
}

/// Resolve bullet–enemy hits and return the number of enemies destroyed.
///
/// Enemies are scanned newest first; for each, bullets are scanned newest
/// first and the first overlapping bullet destroys it. An enemy takes at
/// most one bullet, and a bullet that already destroyed an enemy is gone
/// for the rest of the pass. Both are pushed to the despawn buffer.
/// Entities already in the buffer do not take part.
pub fn resolve_bullet_hits(world: &World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    let enemies = live_boxes::<Enemy>(world, despawn_buffer);
    let mut bullets = live_boxes::<Bullet>(world, despawn_buffer);
    let mut kills = 0;

    for (enemy, enemy_box) in enemies.iter().rev() {
        let Some(idx) = bullets
            .iter()
            .rposition(|(_, bullet_box)| bullet_box.intersects(enemy_box))
        else {
            continue;
        };
        let (bullet, _) = bullets.remove(idx);
        despawn_buffer.push(*enemy);
        despawn_buffer.push(bullet);
        kills += 1;
    }

    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::{self, EnemySpawn};

    fn bullet_at(world: &mut World, seq: u64, x: f64, z: f64) -> Entity {
        // Bullets spawn 2 units in front of the given ship position.
        world_setup::spawn_bullet(world, SpawnSeq(seq), &Position::new(x, 0.0, z + 2.0))
    }

    #[test]
    fn test_single_hit() {
        let mut world = World::new();
        let enemy = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        let bullet = bullet_at(&mut world, 1, 0.3, -20.5);

        let mut buffer = Vec::new();
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 1);
        assert_eq!(buffer, vec![enemy, bullet]);
    }

    #[test]
    fn test_miss_on_lateral_gap() {
        let mut world = World::new();
        world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        // 0.75 + 0.1 = 0.85 needed to overlap.
        bullet_at(&mut world, 1, 0.9, -20.0);

        let mut buffer = Vec::new();
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_one_bullet_two_enemies_newest_enemy_wins() {
        let mut world = World::new();
        let older = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        let newer = world_setup::spawn_enemy(&mut world, SpawnSeq(1), &EnemySpawn::baseline(0.5, -20.0, 0.2));
        let bullet = bullet_at(&mut world, 2, 0.0, -20.0);

        let mut buffer = Vec::new();
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 1);
        assert_eq!(buffer, vec![newer, bullet]);
        assert!(!buffer.contains(&older));
    }

    #[test]
    fn test_one_enemy_two_bullets_newest_bullet_used() {
        let mut world = World::new();
        let enemy = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        let older = bullet_at(&mut world, 1, 0.0, -20.2);
        let newer = bullet_at(&mut world, 2, 0.0, -19.8);

        let mut buffer = Vec::new();
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 1);
        assert_eq!(buffer, vec![enemy, newer]);
        assert!(!buffer.contains(&older));
    }

    #[test]
    fn test_two_pairs_both_resolve() {
        let mut world = World::new();
        let left = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(-5.0, -30.0, 0.2));
        let right = world_setup::spawn_enemy(&mut world, SpawnSeq(1), &EnemySpawn::baseline(5.0, -30.0, 0.2));
        let b_left = bullet_at(&mut world, 2, -5.0, -30.0);
        let b_right = bullet_at(&mut world, 3, 5.0, -30.0);

        let mut buffer = Vec::new();
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 2);
        assert_eq!(buffer, vec![right, b_right, left, b_left]);
    }

    #[test]
    fn test_marked_entities_are_skipped() {
        let mut world = World::new();
        let enemy = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        bullet_at(&mut world, 1, 0.0, -20.0);

        let mut buffer = vec![enemy];
        assert_eq!(resolve_bullet_hits(&world, &mut buffer), 0);
        assert_eq!(buffer, vec![enemy]);
    }

    #[test]
    fn test_world_box_of_missing_entity() {
        let mut world = World::new();
        let enemy = world_setup::spawn_enemy(&mut world, SpawnSeq(0), &EnemySpawn::baseline(0.0, -20.0, 0.2));
        assert!(world_box(&world, enemy).is_some());
        world.despawn(enemy).unwrap();
        assert!(world_box(&world, enemy).is_none());
    }
}
