//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::color::ShipColor;
use crate::enums::EnemyShape;
use crate::geometry::Aabb;

/// Creation order. Strictly increasing across every entity spawned by an
/// engine, so sorting by it recovers insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnSeq(pub u64);

/// Scalar speed in world units per tick. Direction is implied by the
/// entity kind (ship: lateral, bullet: -z, enemy: +z).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Speed(pub f64);

/// Local-space bounding box relative to the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox(pub Aabb);

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    pub color: ShipColor,
}

/// Marks a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// Marks an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Enhanced-mode enemy look. Purely cosmetic except for `scale`, which
/// sizes the hitbox at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyLook {
    pub shape: EnemyShape,
    pub scale: f64,
    /// Body hue in degrees [0, 360).
    pub hue: f64,
    /// Emissive hue in degrees [0, 360).
    pub emissive_hue: f64,
}

/// Cosmetic rotation applied each tick to enhanced enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    /// Radians per tick, applied to both x and y rotation.
    pub rate: f64,
    pub angle_x: f64,
    pub angle_y: f64,
}
