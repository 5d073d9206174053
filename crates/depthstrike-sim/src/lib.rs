//! Simulation engine for DEPTHSTRIKE.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use depthstrike_core as core;
pub use engine::SimulationEngine;
