//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy tier. Kind-specific numbers live in the horde AI profile table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Regular,
    Boss,
}

/// Enemy lifecycle / behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Placed but still inside its start delay.
    #[default]
    Spawned,
    /// Closing in on the player.
    Pursuing,
    /// Player out of detection range.
    Wandering,
    /// Within attack range this tick.
    Attacking,
    /// Killed; waiting for corpse removal.
    Dying,
    /// Terminal. No further updates.
    Removed,
}

impl EnemyState {
    /// Whether the enemy still takes part in movement and combat.
    pub fn is_alive(self) -> bool {
        !matches!(self, EnemyState::Dying | EnemyState::Removed)
    }
}

/// Player weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Shotgun,
    MachineGun,
}

impl WeaponKind {
    /// Whether this weapon draws from an ammo counter.
    pub fn uses_ammo(self) -> bool {
        !matches!(self, WeaponKind::Pistol)
    }
}

/// Weapon pickup type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Shotgun,
    MachineGun,
}

impl PickupKind {
    pub fn weapon(self) -> WeaponKind {
        match self {
            PickupKind::Shotgun => WeaponKind::Shotgun,
            PickupKind::MachineGun => WeaponKind::MachineGun,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
    Won,
}

/// Wave director state, derived from the director flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    #[default]
    Idle,
    InProgress,
    Transitioning,
    Complete,
}
