//! Weapons system: trigger handling, fire-rate gating, ammo and pellets.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use holdout_core::config::{TimingConfig, WeaponConfig};
use holdout_core::constants::MUZZLE_OFFSET;
use holdout_core::enums::WeaponKind;
use holdout_core::events::{EventSink, GameEvent};

use crate::player::PlayerState;
use crate::systems::spawner::symmetric;
use crate::world_setup;

/// Fire the equipped weapon if the trigger is held and the cooldown has
/// passed. Returns the number of bullets spawned.
///
/// A special weapon with no ammo does not fire: the pull swaps back to
/// the pistol instead.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    fire_held: bool,
    weapons: &WeaponConfig,
    timing: &TimingConfig,
    rng: &mut ChaCha8Rng,
    now_ms: u64,
    events: &mut impl EventSink,
) -> u32 {
    if !fire_held {
        return 0;
    }

    let weapon = player.current_weapon;
    let stats = weapons.stats(weapon);
    if let Some(last) = player.last_shot_ms {
        if now_ms.saturating_sub(last) <= stats.cooldown_ms {
            return 0;
        }
    }

    if weapon.uses_ammo() && player.ammo(weapon) == 0 {
        player.equip(WeaponKind::Pistol, events);
        return 0;
    }

    player.last_shot_ms = Some(now_ms);
    let forward = player.forward();
    let eye = DVec3::new(player.position.x, player.position.y, player.position.z);

    let pellets = match weapon {
        WeaponKind::Shotgun => weapons.shotgun_pellets,
        _ => 1,
    };
    let spread = weapons.shotgun_spread / 2.0;

    for _ in 0..pellets {
        let direction = if weapon == WeaponKind::Shotgun {
            let jitter = DVec3::new(symmetric(rng, spread), symmetric(rng, spread), 0.0);
            let jittered = (forward + jitter).normalize_or_zero();
            if jittered == DVec3::ZERO {
                forward
            } else {
                jittered
            }
        } else {
            forward
        };
        world_setup::spawn_bullet(
            world,
            eye + direction * MUZZLE_OFFSET,
            direction,
            weapons.bullet_speed,
            stats.damage,
            now_ms,
            timing.bullet_lifetime_ms,
        );
    }

    if weapon.uses_ammo() {
        let ammo = player.ammo(weapon) - 1;
        player.set_ammo(weapon, ammo);
        events.emit(GameEvent::AmmoChanged { weapon, ammo });
    }

    pellets
}
