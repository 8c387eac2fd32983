//! Horde AI for HOLDOUT.
//!
//! Implements the enemy behaviour state machine and the kind-driven
//! profiles that parameterise it.

pub mod fsm;
pub mod profiles;

pub use holdout_core as core;

#[cfg(test)]
mod tests;
