//! Gameplay tuning loaded at session start.
//!
//! Every field has a default taken from [`crate::constants`], so a config file
//! only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundary::WorldLayout;
use crate::constants::*;
use crate::enums::WeaponKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("wave table is empty")]
    EmptyWaveTable,
    #[error("wave {0} has no enemies")]
    EmptyWave(u32),
    #[error("max health must be positive (got {0})")]
    NonPositiveHealth(i32),
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("boundary {0} has min greater than max")]
    InvertedBoundary(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Enemy count per wave. The last wave is the boss wave.
    pub zombies_per_wave: Vec<u32>,
    /// Regulars spawned alongside the boss.
    pub final_wave_escort: u32,
    pub wave_bonus_per_index: u32,
    pub skip_wave_bonus: u32,
    pub spawn_stagger_ms: u64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            zombies_per_wave: ZOMBIES_PER_WAVE.to_vec(),
            final_wave_escort: FINAL_WAVE_ESCORT,
            wave_bonus_per_index: WAVE_BONUS_PER_INDEX,
            skip_wave_bonus: SKIP_WAVE_BONUS,
            spawn_stagger_ms: SPAWN_STAGGER_MS,
        }
    }
}

impl WaveConfig {
    pub fn max_waves(&self) -> u32 {
        self.zombies_per_wave.len() as u32
    }

    /// Table entry for a 1-based wave number, or 0 outside the table.
    pub fn count_for(&self, wave: u32) -> u32 {
        wave.checked_sub(1)
            .and_then(|i| self.zombies_per_wave.get(i as usize))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub damage_cooldown_ms: u64,
    /// Walk speed (units/s).
    pub speed: f64,
    pub look_sensitivity: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            damage_cooldown_ms: PLAYER_DAMAGE_COOLDOWN_MS,
            speed: PLAYER_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub cooldown_ms: u64,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub pistol: WeaponStats,
    pub shotgun: WeaponStats,
    pub machine_gun: WeaponStats,
    pub shotgun_pellets: u32,
    /// Full width of the pellet jitter on X and Y.
    pub shotgun_spread: f64,
    pub shotgun_pickup_ammo: u32,
    pub machine_gun_pickup_ammo: u32,
    /// Bullet speed (units/s).
    pub bullet_speed: f64,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            pistol: WeaponStats {
                cooldown_ms: PISTOL_COOLDOWN_MS,
                damage: PISTOL_DAMAGE,
            },
            shotgun: WeaponStats {
                cooldown_ms: SHOTGUN_COOLDOWN_MS,
                damage: SHOTGUN_DAMAGE,
            },
            machine_gun: WeaponStats {
                cooldown_ms: MACHINE_GUN_COOLDOWN_MS,
                damage: MACHINE_GUN_DAMAGE,
            },
            shotgun_pellets: SHOTGUN_PELLETS,
            shotgun_spread: SHOTGUN_SPREAD,
            shotgun_pickup_ammo: SHOTGUN_PICKUP_AMMO,
            machine_gun_pickup_ammo: MACHINE_GUN_PICKUP_AMMO,
            bullet_speed: BULLET_SPEED,
        }
    }
}

impl WeaponConfig {
    pub fn stats(&self, weapon: WeaponKind) -> WeaponStats {
        match weapon {
            WeaponKind::Pistol => self.pistol,
            WeaponKind::Shotgun => self.shotgun,
            WeaponKind::MachineGun => self.machine_gun,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub wave_restart_delay_ms: u64,
    pub corpse_removal_ms: u64,
    pub lunge_revert_ms: u64,
    pub bullet_lifetime_ms: u64,
    pub message_duration_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wave_restart_delay_ms: WAVE_RESTART_DELAY_MS,
            corpse_removal_ms: CORPSE_REMOVAL_MS,
            lunge_revert_ms: LUNGE_REVERT_MS,
            bullet_lifetime_ms: BULLET_LIFETIME_MS,
            message_duration_ms: MESSAGE_DURATION_MS,
        }
    }
}

/// All tunable gameplay parameters for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub waves: WaveConfig,
    pub player: PlayerConfig,
    pub weapons: WeaponConfig,
    pub timing: TimingConfig,
    pub layout: WorldLayout,
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        if let Err(e) = config.validate() {
            log::warn!("rejected game config: {e}");
            return Err(e);
        }
        Ok(config)
    }

    /// Check the tables for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves.zombies_per_wave.is_empty() {
            return Err(ConfigError::EmptyWaveTable);
        }
        if let Some(i) = self.waves.zombies_per_wave.iter().position(|&n| n == 0) {
            return Err(ConfigError::EmptyWave(i as u32 + 1));
        }
        if self.player.max_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.player.max_health));
        }
        if self.player.speed <= 0.0 {
            return Err(ConfigError::NonPositive("player speed"));
        }
        if self.weapons.bullet_speed <= 0.0 {
            return Err(ConfigError::NonPositive("bullet speed"));
        }
        if self.weapons.shotgun_pellets == 0 {
            return Err(ConfigError::NonPositive("shotgun pellets"));
        }
        if self.timing.bullet_lifetime_ms == 0 {
            return Err(ConfigError::NonPositive("bullet lifetime"));
        }
        if self.layout.extent <= 0.0 {
            return Err(ConfigError::NonPositive("world extent"));
        }
        if let Some(i) = self
            .layout
            .boundaries
            .iter()
            .position(|b| b.min_x > b.max_x || b.min_z > b.max_z)
        {
            return Err(ConfigError::InvertedBoundary(i));
        }
        Ok(())
    }
}
