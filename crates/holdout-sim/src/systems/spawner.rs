//! Wave spawning: picks spawn points around the player and creates the
//! wave's enemies.
//!
//! Placement never fails. Every random search is bounded and falls back
//! to a fixed point when nothing valid turns up.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::boundary::WorldLayout;
use holdout_core::constants::*;
use holdout_core::enums::EnemyKind;
use holdout_core::events::{EventSink, GameEvent};

use crate::world_setup;

/// How many enemies of each kind to spawn for one wave.
#[derive(Debug, Clone, Copy)]
pub struct WavePlan {
    pub regulars: u32,
    pub bosses: u32,
    /// Window across which regular start times are spread (ms).
    pub stagger_ms: u64,
}

/// Spawn a whole wave around `player`. Returns the number of enemies created.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    layout: &WorldLayout,
    player: DVec2,
    plan: WavePlan,
    next_enemy_id: &mut u32,
    events: &mut impl EventSink,
) -> u32 {
    let mut spawned = 0;

    for _ in 0..plan.bosses {
        let at = place_boss(rng, layout, player);
        let (_, id, position) =
            world_setup::spawn_enemy(world, rng, next_enemy_id, EnemyKind::Boss, at, 0.0);
        events.emit(GameEvent::EnemySpawned {
            id,
            kind: EnemyKind::Boss,
            position,
        });
        spawned += 1;
    }

    if plan.regulars == 0 {
        return spawned;
    }

    let centers = cluster_centers(rng, layout, player, cluster_count(plan.regulars));
    let mut placed: Vec<DVec2> = Vec::with_capacity(plan.regulars as usize);

    for i in 0..plan.regulars {
        let center = centers[i as usize % centers.len()];
        let at = place_in_cluster(rng, layout, center, &placed);
        placed.push(at);

        let delay = i as f64 * plan.stagger_ms as f64 / plan.regulars as f64;
        let (_, id, position) =
            world_setup::spawn_enemy(world, rng, next_enemy_id, EnemyKind::Regular, at, delay);
        events.emit(GameEvent::EnemySpawned {
            id,
            kind: EnemyKind::Regular,
            position,
        });
        spawned += 1;
    }

    spawned
}

/// `min(8, ceil(count / 5))`, at least one.
pub fn cluster_count(count: u32) -> usize {
    let n = count.div_ceil(ENEMIES_PER_CLUSTER) as usize;
    n.clamp(1, MAX_SPAWN_CLUSTERS)
}

/// Cluster centres at even angular spacing around the player, each nudged
/// by a random angle and placed at a random distance.
pub fn cluster_centers(
    rng: &mut ChaCha8Rng,
    layout: &WorldLayout,
    player: DVec2,
    count: usize,
) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let nominal = i as f64 * TAU / count as f64;
            for _ in 0..CLUSTER_ATTEMPTS {
                let angle = nominal + symmetric(rng, CLUSTER_ANGLE_JITTER);
                let distance = rng.gen_range(CLUSTER_MIN_DISTANCE..CLUSTER_MAX_DISTANCE);
                let candidate = player + DVec2::from_angle(angle) * distance;
                if layout.can_occupy(candidate.x, candidate.y, ZOMBIE_COLLISION_RADIUS) {
                    return candidate;
                }
            }
            log::debug!("cluster {i}: no free spot, using fallback");
            player + DVec2::from_angle(nominal) * CLUSTER_FALLBACK_DISTANCE
        })
        .collect()
}

/// Jitter around a cluster centre, keeping clear of obstacles and of the
/// enemies already placed.
pub fn place_in_cluster(
    rng: &mut ChaCha8Rng,
    layout: &WorldLayout,
    center: DVec2,
    placed: &[DVec2],
) -> DVec2 {
    let half = CLUSTER_SPREAD / 2.0;
    for _ in 0..ENEMY_PLACEMENT_ATTEMPTS {
        let candidate = center + DVec2::new(symmetric(rng, half), symmetric(rng, half));
        if !layout.can_occupy(candidate.x, candidate.y, ZOMBIE_COLLISION_RADIUS) {
            continue;
        }
        if placed
            .iter()
            .any(|p| p.distance(candidate) < MIN_SPAWN_SEPARATION)
        {
            continue;
        }
        return candidate;
    }
    center
}

/// Somewhere 30 to 60 units from the player, clear of obstacles.
pub fn place_boss(rng: &mut ChaCha8Rng, layout: &WorldLayout, player: DVec2) -> DVec2 {
    for _ in 0..BOSS_PLACEMENT_ATTEMPTS {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(BOSS_MIN_DISTANCE..BOSS_MAX_DISTANCE);
        let candidate = player + DVec2::from_angle(angle) * distance;
        if layout.can_occupy(candidate.x, candidate.y, ZOMBIE_COLLISION_RADIUS) {
            return candidate;
        }
    }
    log::debug!("boss: no free spot, using fallback");
    let angle = rng.gen_range(0.0..TAU);
    player + DVec2::from_angle(angle) * BOSS_FALLBACK_DISTANCE
}

/// Uniform in `[-half, half)`; zero when `half` is not positive.
pub(crate) fn symmetric(rng: &mut ChaCha8Rng, half: f64) -> f64 {
    if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}
