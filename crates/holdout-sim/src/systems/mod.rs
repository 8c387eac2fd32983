//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only) plus whatever engine state they touch. They do not own state.

pub mod bullets;
pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod pickups;
pub mod player_movement;
pub mod snapshot;
pub mod spawner;
pub mod waves;
pub mod weapons;
