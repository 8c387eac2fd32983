//! Enemy AI system: runs the horde FSM for each enemy, moves it with
//! obstacle sliding and resolves its attacks on the player.
//!
//! Calls the FSM from holdout-horde-ai, then updates ECS components.

use glam::DVec2;
use hecs::World;

use holdout_core::boundary::WorldLayout;
use holdout_core::components::{Enemy, EnemyId, StartDelay, WalkCycle};
use holdout_core::config::TimingConfig;
use holdout_core::constants::{LUNGE_DISTANCE, WALK_CYCLE_RATE};
use holdout_core::events::{EventSink, GameEvent};
use holdout_core::types::Position;

use holdout_horde_ai::fsm::{evaluate, EnemyContext};
use holdout_horde_ai::profiles::get_profile;

use crate::player::PlayerState;
use crate::schedule::{DeferredAction, Scheduler};

struct PendingAttack {
    entity: hecs::Entity,
    id: EnemyId,
    direction: DVec2,
    damage: i32,
}

/// Run the enemy AI. Returns true if an attack brought the player to zero.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    layout: &WorldLayout,
    player: &mut PlayerState,
    scheduler: &mut Scheduler,
    timing: &TimingConfig,
    now_ms: u64,
    dt: f64,
    events: &mut impl EventSink,
) -> bool {
    let mut attacks: Vec<PendingAttack> = Vec::new();
    let now_secs = now_ms as f64 / 1000.0;
    let player_position = player.position;
    let player_targetable = !player.is_game_over;

    for (entity, (id, enemy, pos, delay, walk)) in world.query_mut::<(
        &EnemyId,
        &mut Enemy,
        &mut Position,
        &mut StartDelay,
        &mut WalkCycle,
    )>() {
        if !enemy.state.is_alive() {
            continue;
        }
        if delay.remaining_ms > 0.0 {
            delay.remaining_ms = (delay.remaining_ms - dt * 1000.0).max(0.0);
            continue;
        }

        let ctx = EnemyContext {
            kind: enemy.kind,
            state: enemy.state,
            position: *pos,
            player_position,
            player_targetable,
            start_delay_ms: delay.remaining_ms,
            wander_offset: enemy.wander_offset,
            now_secs,
        };
        let decision = evaluate(&ctx);
        if decision.state_changed {
            log::debug!(
                "enemy {} {:?} -> {:?}",
                id.0,
                enemy.state,
                decision.new_state
            );
        }

        enemy.state = decision.new_state;
        if let Some(facing) = decision.facing {
            enemy.facing = facing;
        }

        if decision.is_moving() {
            let profile = get_profile(enemy.kind);
            let to = layout.move_with_avoidance(
                pos.planar(),
                decision.move_direction,
                decision.speed * dt,
                profile.collision_radius,
            );
            pos.x = to.x;
            pos.z = to.y;
            walk.phase += WALK_CYCLE_RATE * dt;
        }

        if decision.attack {
            attacks.push(PendingAttack {
                entity,
                id: *id,
                direction: decision.move_direction,
                damage: get_profile(enemy.kind).damage,
            });
        }
    }

    for attack in attacks {
        if player.is_game_over {
            break;
        }
        if !player.health.take_damage(attack.damage, now_ms) {
            continue;
        }
        events.emit(GameEvent::PlayerDamaged {
            amount: attack.damage,
            health: player.health.current,
            fraction: player.health.fraction(),
            attacker: attack.id,
        });

        if let Ok(mut pos) = world.get::<&mut Position>(attack.entity) {
            let origin = pos.planar();
            pos.x += attack.direction.x * LUNGE_DISTANCE;
            pos.z += attack.direction.y * LUNGE_DISTANCE;
            scheduler.schedule(
                now_ms + timing.lunge_revert_ms,
                DeferredAction::LungeRevert {
                    entity: attack.entity,
                    origin,
                },
            );
        }

        if player.health.is_dead() {
            player.is_game_over = true;
        }
    }

    player.is_game_over
}
