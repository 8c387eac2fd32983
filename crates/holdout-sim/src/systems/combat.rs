//! Combat resolution: bullet/enemy proximity, damage, and death handling.
//!
//! Each bullet hits at most one enemy, the first living one within that
//! enemy's hit radius. Death is handled exactly once per enemy. A boss
//! death takes every other living enemy down with it.

use hecs::{Entity, World};

use holdout_core::actor::Health;
use holdout_core::components::{Bullet, Enemy, EnemyId};
use holdout_core::config::TimingConfig;
use holdout_core::enums::{EnemyKind, EnemyState};
use holdout_core::events::{EventSink, GameEvent};
use holdout_core::types::Position;

use holdout_horde_ai::profiles::get_profile;

use crate::director::WaveDirector;
use crate::player::PlayerState;
use crate::schedule::{DeferredAction, Scheduler};

/// Everything a kill touches besides the world.
pub struct KillContext<'a, S: EventSink> {
    pub director: &'a mut WaveDirector,
    pub player: &'a mut PlayerState,
    pub scheduler: &'a mut Scheduler,
    pub timing: &'a TimingConfig,
    pub now_ms: u64,
    pub events: &'a mut S,
}

/// Resolve bullet hits. Consumed bullets are queued for despawn.
/// Returns the number of enemies killed.
pub fn run<S: EventSink>(
    world: &mut World,
    ctx: &mut KillContext<'_, S>,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    let mut bullets: Vec<(Entity, Position, i32)> = world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(e, (pos, bullet))| (e, *pos, bullet.damage))
        .collect();
    bullets.retain(|(e, _, _)| !despawn_buffer.contains(e));

    let mut enemies: Vec<(Entity, EnemyId)> = world
        .query::<(&EnemyId, &Enemy)>()
        .iter()
        .map(|(e, (id, _))| (e, *id))
        .collect();
    enemies.sort_by_key(|(_, id)| *id);

    let mut kills = 0;
    for (bullet, bullet_pos, damage) in bullets {
        let target = enemies.iter().find_map(|&(entity, _)| {
            let enemy = world.get::<&Enemy>(entity).ok()?;
            if !enemy.state.is_alive() {
                return None;
            }
            let pos = world.get::<&Position>(entity).ok()?;
            let radius = get_profile(enemy.kind).hit_radius;
            (bullet_pos.distance_to(&pos) < radius).then_some(entity)
        });
        let Some(target) = target else {
            continue;
        };

        despawn_buffer.push(bullet);
        kills += apply_hit(world, target, damage, ctx);
    }
    kills
}

/// Damage one enemy. Regulars drop on any hit; bosses lose `damage`.
/// Returns the number of enemies killed as a result.
pub fn apply_hit<S: EventSink>(
    world: &mut World,
    entity: Entity,
    damage: i32,
    ctx: &mut KillContext<'_, S>,
) -> u32 {
    let (id, kind, health) = {
        let Ok(mut query) = world.query_one::<(&EnemyId, &Enemy, &mut Health)>(entity) else {
            return 0;
        };
        let Some((id, enemy, health)) = query.get() else {
            return 0;
        };
        if !enemy.state.is_alive() {
            return 0;
        }
        if get_profile(enemy.kind).one_hit_kill {
            health.force_kill(ctx.now_ms);
        } else {
            health.take_damage(damage, ctx.now_ms);
        }
        (*id, enemy.kind, *health)
    };

    if !health.is_dead() {
        ctx.events.emit(GameEvent::EnemyDamaged {
            id,
            health: health.current,
            max_health: health.max,
            fraction: health.fraction(),
        });
        return 0;
    }

    let mut killed = u32::from(kill_enemy(world, entity, ctx));
    if kind == EnemyKind::Boss {
        killed += clear_field(world, entity, ctx);
    }
    killed
}

/// Death handling for one enemy: score, counter, Dying, removal timer.
/// Returns false if the enemy was already dead.
pub fn kill_enemy<S: EventSink>(
    world: &mut World,
    entity: Entity,
    ctx: &mut KillContext<'_, S>,
) -> bool {
    let (id, kind, position) = {
        let Ok(mut query) =
            world.query_one::<(&EnemyId, &mut Enemy, &mut Health, &Position)>(entity)
        else {
            return false;
        };
        let Some((id, enemy, health, pos)) = query.get() else {
            return false;
        };
        if !enemy.state.is_alive() {
            return false;
        }
        enemy.state = EnemyState::Dying;
        if !health.is_dead() {
            health.force_kill(ctx.now_ms);
        }
        (*id, enemy.kind, *pos)
    };

    ctx.player.add_score(get_profile(kind).kill_score, &mut *ctx.events);
    ctx.director.on_kill();
    ctx.events.emit(ctx.director.changed_event());
    ctx.scheduler.schedule(
        ctx.now_ms + ctx.timing.corpse_removal_ms,
        DeferredAction::RemoveCorpse { entity },
    );
    ctx.events.emit(GameEvent::EnemyDied { id, kind, position });
    true
}

/// Kill every living enemy other than `except`, then zero the counter.
fn clear_field<S: EventSink>(
    world: &mut World,
    except: Entity,
    ctx: &mut KillContext<'_, S>,
) -> u32 {
    let mut others: Vec<(Entity, EnemyId)> = world
        .query::<(&EnemyId, &Enemy)>()
        .iter()
        .filter(|(e, (_, enemy))| *e != except && enemy.state.is_alive())
        .map(|(e, (id, _))| (e, *id))
        .collect();
    others.sort_by_key(|(_, id)| *id);

    let killed = others
        .into_iter()
        .filter(|&(entity, _)| kill_enemy(world, entity, ctx))
        .count() as u32;
    if ctx.director.zombies_remaining != 0 {
        ctx.director.zombies_remaining = 0;
        ctx.events.emit(ctx.director.changed_event());
    }
    killed
}
