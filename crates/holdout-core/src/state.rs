//! Game state snapshot: the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub pickups: Vec<PickupView>,
    /// Current HUD message, if any.
    pub message: Option<String>,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub yaw: f64,
    pub pitch: f64,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub weapon: WeaponKind,
    pub shotgun_ammo: u32,
    pub machine_gun_ammo: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub current_wave: u32,
    pub max_waves: u32,
    pub zombies_remaining: u32,
    pub phase: WavePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub position: Position,
    pub facing: f64,
    pub health: i32,
    pub max_health: i32,
    /// Walk animation phase (radians).
    pub walk_cycle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PickupKind,
    pub position: Position,
}
