//! ECS components for hecs entities.
//!
//! Components are plain data structs.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Velocity;

/// Stable enemy identifier used in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Zombie behaviour state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub state: EnemyState,
    /// Per-enemy phase offset for the wander heading (radians).
    pub wander_offset: f64,
    /// Facing yaw on the ground plane (radians, atan2(dir_x, dir_z)).
    pub facing: f64,
}

/// Walk animation clock exposed to presentation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WalkCycle {
    /// Random starting offset so neighbours don't walk in lockstep.
    pub offset: f64,
    /// Accumulated phase (radians), advanced only while walking.
    pub phase: f64,
}

impl WalkCycle {
    pub fn value(&self) -> f64 {
        self.offset + self.phase
    }
}

/// Remaining hold time before a freshly spawned enemy starts moving.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StartDelay {
    pub remaining_ms: f64,
}

/// Projectile fired by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub velocity: Velocity,
    pub damage: i32,
    pub created_at_ms: u64,
    pub lifetime_ms: u64,
}

impl Bullet {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= self.lifetime_ms
    }
}

/// Weapon pickup lying in the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}
