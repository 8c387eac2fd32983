//! Bullet integration and expiry.

use hecs::{Entity, World};

use holdout_core::components::Bullet;
use holdout_core::types::Position;

/// Move every bullet by one step and queue expired ones for despawn.
pub fn run(world: &mut World, now_ms: u64, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (pos, bullet)) in world.query_mut::<(&mut Position, &Bullet)>() {
        if bullet.is_expired(now_ms) {
            despawn_buffer.push(entity);
            continue;
        }
        pos.x += bullet.velocity.x * dt;
        pos.y += bullet.velocity.y * dt;
        pos.z += bullet.velocity.z * dt;
    }
}
