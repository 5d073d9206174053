//! Core types and definitions for the DEPTHSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, geometry, commands, state snapshots, events, and constants.
//! It has no dependency on any host or rendering framework.

pub mod color;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
