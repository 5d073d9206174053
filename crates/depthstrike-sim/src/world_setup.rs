//! Entity spawn factories for the simulation world.
//!
//! Creates the ship, bullets and enemies with the component bundles the
//! systems expect. Random enemy parameters are rolled separately so tests
//! can spawn enemies with exact values.

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use depthstrike_core::color::ShipColor;
use depthstrike_core::components::*;
use depthstrike_core::constants::*;
use depthstrike_core::enums::{EnemyShape, VisualMode};
use depthstrike_core::geometry::Aabb;
use depthstrike_core::types::Position;

/// Parameters for a single enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub x: f64,
    pub z: f64,
    pub speed: f64,
    /// Enhanced mode only.
    pub look: Option<EnemyLook>,
    /// Enhanced mode only.
    pub spin: Option<Spin>,
}

impl EnemySpawn {
    /// A plain baseline enemy at the given spot.
    pub fn baseline(x: f64, z: f64, speed: f64) -> Self {
        Self {
            x,
            z,
            speed,
            look: None,
            spin: None,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        match self.look {
            Some(look) => Aabb::cube(look.shape.half_extent()).scaled(look.scale),
            None => ENEMY_HITBOX_BASELINE,
        }
    }
}

/// Ship hitbox for the given visual mode.
pub fn ship_hitbox(mode: VisualMode) -> Aabb {
    match mode {
        VisualMode::Baseline => SHIP_HITBOX_BASELINE,
        VisualMode::Enhanced => SHIP_HITBOX_ENHANCED,
    }
}

/// Where the ship appears at session start.
pub fn ship_origin() -> Position {
    Position::new(0.0, 0.0, SHIP_START_Z)
}

/// Where a bullet fired from `ship_pos` appears.
pub fn bullet_origin(ship_pos: &Position) -> Position {
    Position::new(ship_pos.x, 0.0, ship_pos.z - BULLET_SPAWN_OFFSET_Z)
}

/// Spawn the player's ship at its start position.
pub fn spawn_ship(world: &mut World, seq: SpawnSeq, color: ShipColor, mode: VisualMode) -> Entity {
    world.spawn((
        Ship { color },
        seq,
        ship_origin(),
        Speed(SHIP_SPEED),
        Hitbox(ship_hitbox(mode)),
    ))
}

/// Spawn a bullet just in front of the ship.
pub fn spawn_bullet(world: &mut World, seq: SpawnSeq, ship_pos: &Position) -> Entity {
    world.spawn((
        Bullet,
        seq,
        bullet_origin(ship_pos),
        Speed(BULLET_SPEED),
        Hitbox(BULLET_HITBOX),
    ))
}

/// Spawn an enemy from explicit parameters.
pub fn spawn_enemy(world: &mut World, seq: SpawnSeq, params: &EnemySpawn) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(Enemy)
        .add(seq)
        .add(Position::new(params.x, 0.0, params.z))
        .add(Speed(params.speed))
        .add(Hitbox(params.hitbox()));
    if let Some(look) = params.look {
        builder.add(look);
    }
    if let Some(spin) = params.spin {
        builder.add(spin);
    }
    world.spawn(builder.build())
}

/// Roll random enemy parameters: lane, speed and, in enhanced mode, the
/// cosmetic look and spin.
pub fn roll_enemy(rng: &mut ChaCha8Rng, mode: VisualMode) -> EnemySpawn {
    let (look, spin) = match mode {
        VisualMode::Baseline => (None, None),
        VisualMode::Enhanced => {
            let shape = EnemyShape::ALL[rng.gen_range(0..EnemyShape::ALL.len())];
            let hue = rng.gen_range(0.0..360.0);
            let emissive_hue = rng.gen_range(0.0..360.0);
            let rate = rng.gen_range(ENEMY_MIN_SPIN..ENEMY_MAX_SPIN);
            let scale = rng.gen_range(ENEMY_MIN_SCALE..ENEMY_MAX_SCALE);
            (
                Some(EnemyLook {
                    shape,
                    scale,
                    hue,
                    emissive_hue,
                }),
                Some(Spin {
                    rate,
                    ..Spin::default()
                }),
            )
        }
    };

    EnemySpawn {
        x: rng.gen_range(ENEMY_SPAWN_MIN_X..ENEMY_SPAWN_MAX_X),
        z: ENEMY_SPAWN_Z,
        speed: rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED),
        look,
        spin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rolled_enemies_stay_in_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for mode in [VisualMode::Baseline, VisualMode::Enhanced] {
            for _ in 0..500 {
                let e = roll_enemy(&mut rng, mode);
                assert!((ENEMY_SPAWN_MIN_X..ENEMY_SPAWN_MAX_X).contains(&e.x));
                assert!((ENEMY_MIN_SPEED..ENEMY_MAX_SPEED).contains(&e.speed));
                assert_eq!(e.z, ENEMY_SPAWN_Z);
                assert_eq!(e.look.is_some(), mode.is_enhanced());
                assert_eq!(e.spin.is_some(), mode.is_enhanced());
                if let Some(look) = e.look {
                    assert!((ENEMY_MIN_SCALE..ENEMY_MAX_SCALE).contains(&look.scale));
                }
                if let Some(spin) = e.spin {
                    assert!((ENEMY_MIN_SPIN..ENEMY_MAX_SPIN).contains(&spin.rate));
                }
            }
        }
    }

    #[test]
    fn test_enhanced_hitbox_follows_scale() {
        let mut spawn = EnemySpawn::baseline(0.0, -10.0, 0.2);
        assert_eq!(spawn.hitbox(), ENEMY_HITBOX_BASELINE);

        spawn.look = Some(EnemyLook {
            shape: EnemyShape::Icosahedron,
            scale: 1.1,
            hue: 0.0,
            emissive_hue: 0.0,
        });
        let hitbox = spawn.hitbox();
        assert!((hitbox.max.x - 1.1).abs() < 1e-12);
        assert!((hitbox.min.z + 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_dodecahedron_hitbox_is_tighter() {
        let mut spawn = EnemySpawn::baseline(0.0, -10.0, 0.2);
        spawn.look = Some(EnemyLook {
            shape: EnemyShape::Dodecahedron,
            scale: 1.0,
            hue: 0.0,
            emissive_hue: 0.0,
        });
        let hitbox = spawn.hitbox();
        assert!((hitbox.max.x - DODECAHEDRON_HALF_EXTENT).abs() < 1e-12);
        assert!(hitbox.max.x < 1.0);
    }

    #[test]
    fn test_enhanced_enemy_carries_cosmetics() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let enhanced = roll_enemy(&mut rng, VisualMode::Enhanced);
        let fancy = spawn_enemy(&mut world, SpawnSeq(0), &enhanced);
        let plain = spawn_enemy(&mut world, SpawnSeq(1), &EnemySpawn::baseline(1.0, -70.0, 0.2));

        assert_eq!(world.get::<&EnemyLook>(fancy).unwrap().shape, enhanced.look.unwrap().shape);
        assert_eq!(world.get::<&Spin>(fancy).unwrap().rate, enhanced.spin.unwrap().rate);
        assert_eq!(world.get::<&Hitbox>(fancy).unwrap().0, enhanced.hitbox());
        assert!(world.get::<&EnemyLook>(plain).is_err());
        assert!(world.get::<&Spin>(plain).is_err());
        assert_eq!(*world.get::<&SpawnSeq>(plain).unwrap(), SpawnSeq(1));
    }

    #[test]
    fn test_bullet_spawns_in_front_of_ship() {
        let mut world = World::new();
        let ship_pos = Position::new(3.0, 0.0, SHIP_START_Z);
        let bullet = spawn_bullet(&mut world, SpawnSeq(1), &ship_pos);
        let pos = *world.get::<&Position>(bullet).unwrap();
        assert_eq!(pos, Position::new(3.0, 0.0, SHIP_START_Z - 2.0));
    }

    #[test]
    fn test_ship_hitbox_per_mode() {
        assert_eq!(ship_hitbox(VisualMode::Baseline), SHIP_HITBOX_BASELINE);
        assert_eq!(ship_hitbox(VisualMode::Enhanced), SHIP_HITBOX_ENHANCED);
    }
}
