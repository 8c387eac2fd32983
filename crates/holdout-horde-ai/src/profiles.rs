//! Kind-specific enemy profiles.
//!
//! Consolidates per-kind parameters for the horde FSM and combat resolution.

use holdout_core::enums::EnemyKind;

/// Behavioural and combat profile for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: i32,
    /// Damage dealt to the player per accepted hit.
    pub damage: i32,
    /// Planar distance below which the enemy attacks.
    pub attack_range: f64,
    /// Planar distance below which the enemy pursues.
    pub detection_range: f64,
    /// 3D distance below which a bullet counts as a hit.
    pub hit_radius: f64,
    pub speed_multiplier: f64,
    pub kill_score: u32,
    /// Half-size used against collision boundaries.
    pub collision_radius: f64,
    /// Height of the body centre above the ground.
    pub base_height: f64,
    /// Regulars drop to zero on any hit; bosses lose exactly the bullet damage.
    pub one_hit_kill: bool,
}

/// Get the profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use holdout_core::constants::*;

    match kind {
        EnemyKind::Regular => EnemyProfile {
            max_health: REGULAR_HEALTH,
            damage: REGULAR_DAMAGE,
            attack_range: REGULAR_ATTACK_RANGE,
            detection_range: ZOMBIE_DETECTION_RANGE,
            hit_radius: REGULAR_HIT_RADIUS,
            speed_multiplier: 1.0,
            kill_score: REGULAR_KILL_SCORE,
            collision_radius: ZOMBIE_COLLISION_RADIUS,
            base_height: REGULAR_BASE_HEIGHT,
            one_hit_kill: true,
        },
        EnemyKind::Boss => EnemyProfile {
            max_health: BOSS_HEALTH,
            damage: BOSS_DAMAGE,
            attack_range: BOSS_ATTACK_RANGE,
            detection_range: ZOMBIE_DETECTION_RANGE,
            hit_radius: BOSS_HIT_RADIUS,
            speed_multiplier: BOSS_SPEED_MULTIPLIER,
            kill_score: BOSS_KILL_SCORE,
            collision_radius: ZOMBIE_COLLISION_RADIUS,
            base_height: BOSS_BASE_HEIGHT,
            one_hit_kill: false,
        },
    }
}
