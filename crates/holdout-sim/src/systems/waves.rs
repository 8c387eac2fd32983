//! Wave completion: counter reconciliation, completion rewards and the
//! hand-off to the next wave.

use glam::DVec2;
use hecs::World;

use holdout_core::boundary::WorldLayout;
use holdout_core::components::Enemy;
use holdout_core::config::GameConfig;
use holdout_core::constants::{PICKUP_OFFSET_X, PLAYER_COLLISION_RADIUS};
use holdout_core::enums::PickupKind;
use holdout_core::events::{EventSink, GameEvent};

use crate::director::{WaveDirector, WaveOutcome};
use crate::messages::MessageBoard;
use crate::player::PlayerState;
use crate::schedule::{DeferredAction, Scheduler};
use crate::world_setup;

/// Enemies that have not started dying.
pub fn living_enemies(world: &World) -> u32 {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.state.is_alive())
        .count() as u32
}

/// Pickup dropped after clearing a given wave, if any.
pub fn pickup_after_wave(completed: u32) -> Option<PickupKind> {
    match completed {
        1 => Some(PickupKind::Shotgun),
        3 => Some(PickupKind::MachineGun),
        _ => None,
    }
}

/// Where to drop a wave pickup: beside the player on the first side that is
/// reachable and inside the world, else at the player's feet.
pub fn pickup_spot(layout: &WorldLayout, player: DVec2) -> DVec2 {
    let limit = layout.extent - PLAYER_COLLISION_RADIUS;
    let offsets = [
        DVec2::new(PICKUP_OFFSET_X, 0.0),
        DVec2::new(-PICKUP_OFFSET_X, 0.0),
        DVec2::new(0.0, PICKUP_OFFSET_X),
        DVec2::new(0.0, -PICKUP_OFFSET_X),
    ];
    offsets
        .into_iter()
        .map(|offset| player + offset)
        .find(|spot| {
            spot.x.abs() <= limit
                && spot.y.abs() <= limit
                && layout.can_occupy(spot.x, spot.y, PLAYER_COLLISION_RADIUS)
        })
        .unwrap_or_else(|| {
            log::debug!("no clear spot beside the player, dropping pickup in place");
            player
        })
}

/// Check the current wave for completion and apply rewards.
/// A `Won` outcome is returned untouched for the engine to end the session.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    director: &mut WaveDirector,
    player: &mut PlayerState,
    scheduler: &mut Scheduler,
    board: &mut MessageBoard,
    config: &GameConfig,
    now_ms: u64,
    events: &mut impl EventSink,
) -> Option<WaveOutcome> {
    if director.is_wave_in_progress {
        if director.reconcile(living_enemies(world)) {
            events.emit(director.changed_event());
        }
    }

    let outcome = director.check_completion()?;
    let WaveOutcome::Advanced { completed, next } = outcome else {
        return Some(outcome);
    };

    let bonus = config.waves.wave_bonus_per_index * completed;
    log::info!("wave {completed} complete, bonus {bonus}");
    events.emit(GameEvent::WaveCompleted {
        wave: completed,
        bonus,
    });
    player.add_score(bonus, events);
    board.show(
        format!("Wave {completed} Complete!"),
        now_ms,
        config.timing.message_duration_ms,
        scheduler,
        events,
    );

    if let Some(kind) = pickup_after_wave(completed) {
        let spot = pickup_spot(&config.layout, player.position.planar());
        let position = world_setup::spawn_pickup(world, kind, spot.x, spot.y);
        events.emit(GameEvent::PickupSpawned { kind, position });
    }

    let delay = config.timing.wave_restart_delay_ms;
    let countdown_secs = delay.div_ceil(1000);
    for elapsed in 1..countdown_secs {
        scheduler.schedule(
            now_ms + elapsed * 1000,
            DeferredAction::WaveCountdown {
                wave: next,
                seconds_left: countdown_secs - elapsed,
            },
        );
    }
    scheduler.schedule(now_ms + delay, DeferredAction::StartNextWave { wave: next });

    Some(outcome)
}
