//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for presentation.

pub mod director;
pub mod engine;
pub mod messages;
pub mod player;
pub mod schedule;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use holdout_core as core;
