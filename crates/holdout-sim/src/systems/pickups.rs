//! Weapon pickup collection.

use hecs::{Entity, World};

use holdout_core::components::Pickup;
use holdout_core::config::GameConfig;
use holdout_core::constants::PICKUP_RADIUS;
use holdout_core::enums::PickupKind;
use holdout_core::events::{EventSink, GameEvent};
use holdout_core::types::Position;

use crate::messages::MessageBoard;
use crate::player::PlayerState;
use crate::schedule::Scheduler;

/// Collect any pickup within reach of the player's footprint.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    scheduler: &mut Scheduler,
    board: &mut MessageBoard,
    config: &GameConfig,
    now_ms: u64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut impl EventSink,
) {
    let collected: Vec<(Entity, PickupKind)> = world
        .query::<(&Position, &Pickup)>()
        .iter()
        .filter(|(_, (pos, _))| {
            pos.planar_distance_to(&player.position) < PICKUP_RADIUS
        })
        .map(|(e, (_, pickup))| (e, pickup.kind))
        .collect();

    for (entity, kind) in collected {
        let weapon = kind.weapon();
        let ammo = match kind {
            PickupKind::Shotgun => config.weapons.shotgun_pickup_ammo,
            PickupKind::MachineGun => config.weapons.machine_gun_pickup_ammo,
        };
        player.set_ammo(weapon, ammo);
        player.equip(weapon, events);
        events.emit(GameEvent::AmmoChanged { weapon, ammo });
        events.emit(GameEvent::PickupCollected { kind, ammo });

        let name = match kind {
            PickupKind::Shotgun => "shotgun",
            PickupKind::MachineGun => "machine gun",
        };
        board.show(
            format!("Picked up {name}!"),
            now_ms,
            config.timing.message_duration_ms,
            scheduler,
            events,
        );
        despawn_buffer.push(entity);
    }
}
