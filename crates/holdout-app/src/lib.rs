//! HOLDOUT headless driver.
//!
//! Runs the simulation on its own thread, feeds it commands and input,
//! and forwards its events to a presentation sink.

pub mod game_loop;
pub mod sink;
pub mod state;

pub use holdout_core as core;
