//! DEPTHSTRIKE host application.
//!
//! This crate wires the simulation to a front end: it runs the game loop,
//! routes snapshot events to presentation and UI, and keeps the high score
//! on disk.

pub mod autopilot;
pub mod game_loop;
pub mod persistence;
pub mod presentation;
pub mod session;
pub mod settings;
pub mod state;

pub use depthstrike_core as core;
