//! Enemy behaviour finite state machine.
//!
//! Pure functions that pick the next state, movement intent and attack
//! decision for one enemy from its situation relative to the player.
//! No ECS dependency; operates on plain data. Collision resolution of the
//! movement intent happens in the simulation.

use glam::DVec2;

use holdout_core::constants::*;
use holdout_core::enums::{EnemyKind, EnemyState};
use holdout_core::types::Position;

use crate::profiles::{get_profile, EnemyProfile};

/// Input to the horde FSM for a single enemy.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub position: Position,
    pub player_position: Position,
    /// False once the session is over; enemies keep moving but stop attacking.
    pub player_targetable: bool,
    /// Remaining start delay (ms). Positive means hold still.
    pub start_delay_ms: f64,
    pub wander_offset: f64,
    /// Session clock (seconds).
    pub now_secs: f64,
}

/// Output from the horde FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDecision {
    pub new_state: EnemyState,
    /// Unit direction on the ground plane (x, z), zero when holding still.
    pub move_direction: DVec2,
    /// Movement speed (units/s).
    pub speed: f64,
    /// New facing yaw, if it should change.
    pub facing: Option<f64>,
    /// Try to hit the player this tick.
    pub attack: bool,
    pub state_changed: bool,
}

impl EnemyDecision {
    fn hold(state: EnemyState) -> Self {
        Self {
            new_state: state,
            move_direction: DVec2::ZERO,
            speed: 0.0,
            facing: None,
            attack: false,
            state_changed: false,
        }
    }

    /// Whether the enemy walks this tick.
    pub fn is_moving(&self) -> bool {
        self.speed > 0.0 && self.move_direction != DVec2::ZERO
    }
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyDecision {
    // Terminal states: no transitions, no movement
    if !ctx.state.is_alive() {
        return EnemyDecision::hold(ctx.state);
    }

    if ctx.start_delay_ms > 0.0 {
        return EnemyDecision::hold(ctx.state);
    }

    let profile = get_profile(ctx.kind);
    let distance = ctx.position.planar_distance_to(&ctx.player_position);

    let mut decision = if distance < profile.detection_range {
        evaluate_pursuit(ctx, &profile, distance)
    } else {
        evaluate_wander(ctx)
    };
    decision.state_changed = decision.new_state != ctx.state;
    decision
}

fn evaluate_pursuit(ctx: &EnemyContext, profile: &EnemyProfile, distance: f64) -> EnemyDecision {
    let direction = ctx.position.planar_direction_to(&ctx.player_position);
    let attack = distance < profile.attack_range && ctx.player_targetable;

    EnemyDecision {
        new_state: if attack {
            EnemyState::Attacking
        } else {
            EnemyState::Pursuing
        },
        move_direction: direction,
        speed: ZOMBIE_SPEED * profile.speed_multiplier,
        facing: Some(facing_for(direction)),
        attack,
        state_changed: false,
    }
}

fn evaluate_wander(ctx: &EnemyContext) -> EnemyDecision {
    EnemyDecision {
        new_state: EnemyState::Wandering,
        move_direction: wander_direction(ctx.now_secs, ctx.wander_offset),
        speed: ZOMBIE_SPEED * WANDER_SPEED_FACTOR,
        facing: None,
        attack: false,
        state_changed: false,
    }
}

/// Slowly rotating wander heading, unique per enemy through its offset.
pub fn wander_direction(now_secs: f64, offset: f64) -> DVec2 {
    let theta = now_secs * WANDER_RATE + offset;
    DVec2::new(theta.sin(), theta.cos())
}

/// Yaw that faces along a ground-plane direction.
pub fn facing_for(direction: DVec2) -> f64 {
    direction.x.atan2(direction.y)
}
