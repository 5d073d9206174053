//! Axis-aligned bounding boxes, the only collision primitive in the game.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Axis-aligned bounding box. Used both for local-space hitboxes (relative to
/// an entity's origin) and for world-space boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin with the given half-extents.
    pub const fn from_half_extents(half: DVec3) -> Self {
        Self {
            min: DVec3::new(-half.x, -half.y, -half.z),
            max: half,
        }
    }

    /// Cube centered on the origin.
    pub const fn cube(half: f64) -> Self {
        Self::from_half_extents(DVec3::splat(half))
    }

    /// Move a local-space box to an entity's world position.
    pub fn translated(&self, pos: &Position) -> Self {
        let offset = pos.to_dvec3();
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Uniformly scale a local-space box about the origin.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Strict overlap on all three axes. Boxes that only share a face, edge
    /// or corner do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}
