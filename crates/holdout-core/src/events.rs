//! Events emitted by the simulation for audio, HUD and scene feedback.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::*;
use crate::types::Position;

/// Everything presentation needs to react to, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned {
        id: EnemyId,
        kind: EnemyKind,
        position: Position,
    },
    /// Enemy hit by a bullet but still standing.
    EnemyDamaged {
        id: EnemyId,
        health: i32,
        max_health: i32,
        /// `health / max_health` in `[0, 1]`.
        fraction: f64,
    },
    EnemyDied {
        id: EnemyId,
        kind: EnemyKind,
        position: Position,
    },
    /// Corpse cleared or enemy dropped by a wave skip / restart.
    EnemyRemoved {
        id: EnemyId,
    },
    PlayerDamaged {
        amount: i32,
        health: i32,
        fraction: f64,
        attacker: EnemyId,
    },
    ScoreChanged {
        score: u32,
        delta: u32,
    },
    /// Wave started or its remaining count moved.
    WaveChanged {
        wave: u32,
        max_waves: u32,
        zombies_remaining: u32,
    },
    WaveCompleted {
        wave: u32,
        bonus: u32,
    },
    WeaponChanged {
        weapon: WeaponKind,
    },
    AmmoChanged {
        weapon: WeaponKind,
        ammo: u32,
    },
    GameOver {
        score: u32,
        wave: u32,
    },
    GameWon {
        score: u32,
    },
    PickupSpawned {
        kind: PickupKind,
        position: Position,
    },
    PickupCollected {
        kind: PickupKind,
        ammo: u32,
    },
    /// Transient HUD text.
    Message {
        text: String,
    },
    MessageCleared,
}

/// Receiver for simulation events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
