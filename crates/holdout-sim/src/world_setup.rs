//! Entity spawn factories for the simulation world.
//!
//! Creates enemy, bullet and pickup entities with the appropriate
//! component bundles.

use glam::{DVec2, DVec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::actor::Health;
use holdout_core::components::*;
use holdout_core::constants::PICKUP_HEIGHT;
use holdout_core::enums::*;
use holdout_core::types::{Position, Velocity};

use holdout_horde_ai::profiles::get_profile;

/// Spawn an enemy standing at `ground` (x, z). It holds still for
/// `start_delay_ms` before the FSM takes over.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    kind: EnemyKind,
    ground: DVec2,
    start_delay_ms: f64,
) -> (hecs::Entity, EnemyId, Position) {
    let profile = get_profile(kind);
    let id = EnemyId(*next_enemy_id);
    *next_enemy_id += 1;

    let position = Position::new(ground.x, profile.base_height, ground.y);
    let enemy = Enemy {
        kind,
        state: EnemyState::Spawned,
        wander_offset: rng.gen_range(0.0..std::f64::consts::TAU),
        facing: 0.0,
    };
    let walk = WalkCycle {
        offset: rng.gen_range(0.0..std::f64::consts::TAU),
        phase: 0.0,
    };

    // Enemies take every hit; the cooldown gate is a player concern.
    let entity = world.spawn((
        id,
        enemy,
        position,
        Health::new(profile.max_health, 0),
        walk,
        StartDelay {
            remaining_ms: start_delay_ms.max(0.0),
        },
    ));
    (entity, id, position)
}

/// Spawn a bullet at `origin` travelling along `direction` (unit vector).
pub fn spawn_bullet(
    world: &mut World,
    origin: DVec3,
    direction: DVec3,
    speed: f64,
    damage: i32,
    now_ms: u64,
    lifetime_ms: u64,
) -> hecs::Entity {
    let v = direction * speed;
    world.spawn((
        Position::new(origin.x, origin.y, origin.z),
        Bullet {
            velocity: Velocity::new(v.x, v.y, v.z),
            damage,
            created_at_ms: now_ms,
            lifetime_ms,
        },
    ))
}

/// Drop a weapon pickup on the ground at (x, z).
pub fn spawn_pickup(world: &mut World, kind: PickupKind, x: f64, z: f64) -> Position {
    let position = Position::new(x, PICKUP_HEIGHT, z);
    world.spawn((position, Pickup { kind }));
    position
}
