//! Player state tracked by the engine.
//!
//! The player is not an ECS entity. There is exactly one, and every system
//! that touches it takes it by reference.

use glam::DVec3;

use holdout_core::actor::Health;
use holdout_core::config::PlayerConfig;
use holdout_core::constants::*;
use holdout_core::enums::WeaponKind;
use holdout_core::events::{EventSink, GameEvent};
use holdout_core::state::PlayerView;
use holdout_core::types::Position;

#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Eye position. The ground footprint is (x, z).
    pub position: Position,
    /// Heading (radians). Zero looks down -Z.
    pub yaw: f64,
    pub pitch: f64,
    pub health: Health,
    pub score: u32,
    pub current_weapon: WeaponKind,
    pub shotgun_ammo: u32,
    pub machine_gun_ammo: u32,
    pub last_shot_ms: Option<u64>,
    pub is_game_over: bool,
}

impl PlayerState {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: Position::new(PLAYER_START_X, PLAYER_HEIGHT, PLAYER_START_Z),
            yaw: 0.0,
            pitch: 0.0,
            health: Health::new(config.max_health, config.damage_cooldown_ms),
            score: 0,
            current_weapon: WeaponKind::Pistol,
            shotgun_ammo: 0,
            machine_gun_ammo: 0,
            last_shot_ms: None,
            is_game_over: false,
        }
    }

    /// Ammo for a weapon. The pistol never runs dry.
    pub fn ammo(&self, weapon: WeaponKind) -> u32 {
        match weapon {
            WeaponKind::Pistol => u32::MAX,
            WeaponKind::Shotgun => self.shotgun_ammo,
            WeaponKind::MachineGun => self.machine_gun_ammo,
        }
    }

    pub fn set_ammo(&mut self, weapon: WeaponKind, ammo: u32) {
        match weapon {
            WeaponKind::Pistol => {}
            WeaponKind::Shotgun => self.shotgun_ammo = ammo,
            WeaponKind::MachineGun => self.machine_gun_ammo = ammo,
        }
    }

    /// Equip `weapon`, announcing the change. No event if already equipped.
    pub fn equip(&mut self, weapon: WeaponKind, events: &mut impl EventSink) {
        if self.current_weapon != weapon {
            self.current_weapon = weapon;
            events.emit(GameEvent::WeaponChanged { weapon });
        }
    }

    pub fn add_score(&mut self, delta: u32, events: &mut impl EventSink) {
        if delta == 0 {
            return;
        }
        self.score = self.score.saturating_add(delta);
        events.emit(GameEvent::ScoreChanged {
            score: self.score,
            delta,
        });
    }

    /// Unit look direction from yaw and pitch.
    pub fn forward(&self) -> DVec3 {
        DVec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            health: self.health.current,
            max_health: self.health.max,
            score: self.score,
            weapon: self.current_weapon,
            shotgun_ammo: self.shotgun_ammo,
            machine_gun_ammo: self.machine_gun_ammo,
        }
    }
}
