//! Core types and definitions for the HOLDOUT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, the health
//! actor, static collision geometry and gameplay configuration.
//! It has no dependency on any runtime framework.

pub mod actor;
pub mod boundary;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
