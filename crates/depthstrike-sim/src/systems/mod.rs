//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! Removals go through a despawn buffer that `cleanup` drains once per tick.

pub mod cleanup;
pub mod collision;
pub mod enemy_spawner;
pub mod movement;
pub mod ship_control;
pub mod snapshot;
pub mod starfield;

