//! Player input sent from the frontend to the simulation.
//!
//! Continuous intent arrives as an [`InputFrame`] that persists until replaced.
//! Discrete actions are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// Discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the main menu and start wave 1.
    StartGame,
    /// Equip a weapon. Ignored for special weapons with no ammo.
    SwitchWeapon {
        weapon: WeaponKind,
    },
    /// Flip between Active and Paused.
    TogglePause,
    Pause,
    Resume,
    /// Debug: clear the current wave.
    SkipWave,
    /// Reset the session and start again from wave 1.
    Restart,
}

/// Held input for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Strafe intent, -1 (left) to 1 (right).
    pub move_x: f64,
    /// Forward intent, -1 (back) to 1 (forward).
    pub move_z: f64,
    /// Mouse delta since the last frame.
    pub look_dx: f64,
    pub look_dy: f64,
    pub fire_held: bool,
}
