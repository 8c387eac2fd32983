//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use holdout_core::actor::Health;
use holdout_core::components::*;
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::state::*;
use holdout_core::types::{Position, SimTime};

use crate::director::WaveDirector;
use crate::player::PlayerState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &PlayerState,
    director: &WaveDirector,
    message: Option<&str>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: player.view(),
        wave: director.view(),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        pickups: build_pickups(world),
        message: message.map(str::to_owned),
        events,
    }
}

/// Enemies in id order so snapshots are stable across runs.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyId, &Enemy, &Position, &Health, &WalkCycle)>()
        .iter()
        .map(|(_, (id, enemy, pos, health, walk))| EnemyView {
            id: *id,
            kind: enemy.kind,
            state: enemy.state,
            position: *pos,
            facing: enemy.facing,
            health: health.current,
            max_health: health.max,
            walk_cycle: walk.value(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(_, (pos, _))| BulletView { position: *pos })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Position, &Pickup)>()
        .iter()
        .map(|(_, (pos, pickup))| PickupView {
            kind: pickup.kind,
            position: *pos,
        })
        .collect()
}
