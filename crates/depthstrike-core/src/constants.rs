//! Simulation constants and tuning parameters.
//!
//! Speeds are in world units per tick. The simulation uses a fixed step:
//! one `tick()` call is one unit of movement regardless of frame timing.

use glam::DVec3;

use crate::geometry::Aabb;

/// Nominal host refresh rate (Hz). Only the host paces by this; the
/// simulation itself never reads wall-clock time.
pub const TICK_RATE: u32 = 60;

// --- Ship ---

/// Ship spawn depth.
pub const SHIP_START_Z: f64 = 8.0;

/// Lateral distance covered per tick while a move key is held.
pub const SHIP_SPEED: f64 = 0.2;

/// Lateral bounds for the ship's x coordinate.
pub const SHIP_MIN_X: f64 = -8.0;
pub const SHIP_MAX_X: f64 = 8.0;

/// Baseline ship: a 2 x 1 x 3 box.
pub const SHIP_HITBOX_BASELINE: Aabb = Aabb::from_half_extents(DVec3::new(1.0, 0.5, 1.5));

/// Enhanced ship: tapered body (radius 1, length 4) plus a nose cone that
/// reaches z = +3. Wings sit inside the body's x/y extent.
pub const SHIP_HITBOX_ENHANCED: Aabb =
    Aabb::new(DVec3::new(-1.0, -1.0, -2.0), DVec3::new(1.0, 1.0, 3.0));

// --- Bullets ---

pub const BULLET_SPEED: f64 = 0.6;

/// Bullets spawn this far in front of the ship (toward -z).
pub const BULLET_SPAWN_OFFSET_Z: f64 = 2.0;

/// Bullets past this depth have left the playfield.
pub const BULLET_DESPAWN_Z: f64 = -120.0;

/// 0.2 x 0.2 x 1 box.
pub const BULLET_HITBOX: Aabb = Aabb::from_half_extents(DVec3::new(0.1, 0.1, 0.5));

// --- Enemies ---

/// Milliseconds between enemy spawns while a session is active.
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 900;

pub const ENEMY_SPAWN_Z: f64 = -70.0;

/// Spawn x is drawn from [ENEMY_SPAWN_MIN_X, ENEMY_SPAWN_MAX_X).
pub const ENEMY_SPAWN_MIN_X: f64 = -8.0;
pub const ENEMY_SPAWN_MAX_X: f64 = 8.0;

/// Enemy speed is drawn from [ENEMY_MIN_SPEED, ENEMY_MAX_SPEED).
pub const ENEMY_MIN_SPEED: f64 = 0.1;
pub const ENEMY_MAX_SPEED: f64 = 0.3;

/// Enemies past this depth slipped by the ship.
pub const ENEMY_DESPAWN_Z: f64 = 12.0;

/// Baseline enemy: a 1.5 unit cube.
pub const ENEMY_HITBOX_BASELINE: Aabb = Aabb::cube(0.75);

/// Enhanced enemies are unit-radius polyhedra. The icosahedron and the
/// octahedron reach the full radius along an axis.
pub const ENEMY_POLYHEDRON_RADIUS: f64 = 1.0;

/// A unit-radius dodecahedron stops short of the radius: phi / sqrt(3).
pub const DODECAHEDRON_HALF_EXTENT: f64 = 0.934_172_358_962_716;

/// Enhanced enemy scale range [min, max).
pub const ENEMY_MIN_SCALE: f64 = 0.8;
pub const ENEMY_MAX_SCALE: f64 = 1.2;

/// Enhanced enemy spin range (radians per tick) [min, max).
pub const ENEMY_MIN_SPIN: f64 = 0.01;
pub const ENEMY_MAX_SPIN: f64 = 0.06;

// --- Starfield (enhanced only) ---

pub const STARFIELD_SCROLL_SPEED: f64 = 0.2;

/// The starfield offset wraps to zero once it exceeds this value.
pub const STARFIELD_WRAP: f64 = 10.0;

// --- Defaults ---

/// Default ship color (cyan).
pub const DEFAULT_SHIP_COLOR: u32 = 0x00ffff;

/// Key the persisted high score is stored under.
pub const HIGH_SCORE_KEY: &str = "highScore";
