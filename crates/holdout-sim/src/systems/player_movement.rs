//! Player movement: look deltas turn the view, move intent walks the
//! player with the same obstacle sliding enemies use.

use glam::DVec2;

use holdout_core::boundary::WorldLayout;
use holdout_core::commands::InputFrame;
use holdout_core::config::PlayerConfig;
use holdout_core::constants::{PITCH_LIMIT, PLAYER_COLLISION_RADIUS};

use crate::player::PlayerState;

pub fn run(
    player: &mut PlayerState,
    input: &InputFrame,
    layout: &WorldLayout,
    config: &PlayerConfig,
    dt: f64,
) {
    player.yaw -= input.look_dx * config.look_sensitivity;
    player.pitch =
        (player.pitch - input.look_dy * config.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

    let forward = DVec2::new(-player.yaw.sin(), -player.yaw.cos());
    let right = DVec2::new(player.yaw.cos(), -player.yaw.sin());
    let intent = right * input.move_x + forward * input.move_z;
    if intent == DVec2::ZERO {
        return;
    }

    let from = player.position.planar();
    let to = layout.move_with_avoidance(from, intent, config.speed * dt, PLAYER_COLLISION_RADIUS);
    let limit = layout.extent - PLAYER_COLLISION_RADIUS;
    player.position.x = to.x.clamp(-limit, limit);
    player.position.z = to.y.clamp(-limit, limit);
}
