//! Cleanup: despawns consumed bullets, expired bullets, collected pickups
//! and removed enemies.

use hecs::{Entity, World};

use holdout_core::components::{Enemy, EnemyId};
use holdout_core::enums::EnemyState;
use holdout_core::events::{EventSink, GameEvent};

/// Despawn everything queued this tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Mark an enemy Removed, announce it and despawn it.
/// Returns false if the entity no longer exists.
pub fn remove_enemy(world: &mut World, entity: Entity, events: &mut impl EventSink) -> bool {
    let id = match world.query_one_mut::<(&EnemyId, &mut Enemy)>(entity) {
        Ok((id, enemy)) => {
            enemy.state = EnemyState::Removed;
            *id
        }
        Err(_) => return false,
    };
    events.emit(GameEvent::EnemyRemoved { id });
    let _ = world.despawn(entity);
    true
}

/// Remove every enemy, corpses included, in id order.
pub fn remove_all_enemies(world: &mut World, events: &mut impl EventSink) -> u32 {
    let mut all: Vec<(Entity, EnemyId)> = world
        .query::<&EnemyId>()
        .iter()
        .map(|(e, id)| (e, *id))
        .collect();
    all.sort_by_key(|(_, id)| *id);

    all.into_iter()
        .filter(|&(entity, _)| remove_enemy(world, entity, events))
        .count() as u32
}
