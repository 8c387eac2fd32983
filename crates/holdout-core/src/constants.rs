//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds per tick (fractional).
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- World ---

/// Half-extent of the playable square (ground spans [-extent, +extent] on X and Z).
pub const WORLD_EXTENT: f64 = 100.0;

// --- Player ---

/// Player eye height above the ground.
pub const PLAYER_HEIGHT: f64 = 2.0;

/// Player spawn position on the ground plane.
pub const PLAYER_START_X: f64 = 0.0;
pub const PLAYER_START_Z: f64 = 5.0;

/// Player walk speed (units/s).
pub const PLAYER_SPEED: f64 = 6.0;

/// Player collision half-size against boundaries.
pub const PLAYER_COLLISION_RADIUS: f64 = 0.5;

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Invulnerability window after the player takes a hit (ms).
pub const PLAYER_DAMAGE_COOLDOWN_MS: u64 = 1000;

/// Radians of yaw/pitch per unit of look delta.
pub const LOOK_SENSITIVITY: f64 = 0.002;

/// Pitch is clamped just short of straight up/down.
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

// --- Weapons ---

pub const PISTOL_COOLDOWN_MS: u64 = 300;
pub const PISTOL_DAMAGE: i32 = 100;

pub const SHOTGUN_COOLDOWN_MS: u64 = 600;
pub const SHOTGUN_DAMAGE: i32 = 100;
pub const SHOTGUN_PELLETS: u32 = 3;
/// Full width of the per-pellet direction jitter.
pub const SHOTGUN_SPREAD: f64 = 0.1;
pub const SHOTGUN_PICKUP_AMMO: u32 = 100;

pub const MACHINE_GUN_COOLDOWN_MS: u64 = 100;
pub const MACHINE_GUN_DAMAGE: i32 = 40;
pub const MACHINE_GUN_PICKUP_AMMO: u32 = 300;

// --- Bullets ---

/// Bullet speed (units/s).
pub const BULLET_SPEED: f64 = 60.0;

/// Bullet time-to-live (ms).
pub const BULLET_LIFETIME_MS: u64 = 2000;

/// Distance in front of the eye where bullets appear.
pub const MUZZLE_OFFSET: f64 = 1.0;

// --- Enemies ---

/// Base zombie walk speed (units/s).
pub const ZOMBIE_SPEED: f64 = 1.8;

/// Fraction of base speed used while wandering.
pub const WANDER_SPEED_FACTOR: f64 = 0.3;

/// Wander heading angular rate (rad/s).
pub const WANDER_RATE: f64 = 0.5;

/// Walk-cycle phase rate (rad/s).
pub const WALK_CYCLE_RATE: f64 = 5.0;

/// Distance within which zombies notice the player.
pub const ZOMBIE_DETECTION_RANGE: f64 = 30.0;

/// Zombie collision half-size against boundaries.
pub const ZOMBIE_COLLISION_RADIUS: f64 = 0.8;

pub const REGULAR_HEALTH: i32 = 100;
pub const REGULAR_DAMAGE: i32 = 10;
pub const REGULAR_ATTACK_RANGE: f64 = 2.0;
pub const REGULAR_HIT_RADIUS: f64 = 1.5;
pub const REGULAR_KILL_SCORE: u32 = 10;
pub const REGULAR_BASE_HEIGHT: f64 = 1.0;

pub const BOSS_HEALTH: i32 = 200;
pub const BOSS_DAMAGE: i32 = 30;
pub const BOSS_ATTACK_RANGE: f64 = 8.0;
pub const BOSS_HIT_RADIUS: f64 = 5.0;
pub const BOSS_KILL_SCORE: u32 = 100;
pub const BOSS_SPEED_MULTIPLIER: f64 = 0.9;
pub const BOSS_BASE_HEIGHT: f64 = 4.0;

/// Distance the attacker lunges toward the player on a successful hit.
pub const LUNGE_DISTANCE: f64 = 0.5;

/// Delay before a lunge is reverted (ms).
pub const LUNGE_REVERT_MS: u64 = 200;

/// Delay between death and removal of the corpse (ms).
pub const CORPSE_REMOVAL_MS: u64 = 3000;

// --- Waves ---

pub const MAX_WAVES: u32 = 5;

/// Enemies per wave; the last entry is the boss count.
pub const ZOMBIES_PER_WAVE: [u32; 5] = [12, 20, 28, 40, 1];

/// Regular zombies escorting the boss on the final wave.
pub const FINAL_WAVE_ESCORT: u32 = 8;

/// Bonus per completed wave index.
pub const WAVE_BONUS_PER_INDEX: u32 = 50;

/// Bonus for the debug skip action.
pub const SKIP_WAVE_BONUS: u32 = 25;

/// Delay between a wave completing and the next one starting (ms).
pub const WAVE_RESTART_DELAY_MS: u64 = 3000;

/// Window over which regular spawns are staggered (ms).
pub const SPAWN_STAGGER_MS: u64 = 5000;

/// Upper bound on spawn clusters per wave.
pub const MAX_SPAWN_CLUSTERS: usize = 8;

/// Enemies per spawn cluster used to size the cluster count.
pub const ENEMIES_PER_CLUSTER: u32 = 5;

pub const CLUSTER_MIN_DISTANCE: f64 = 20.0;
pub const CLUSTER_MAX_DISTANCE: f64 = 55.0;
pub const CLUSTER_ANGLE_JITTER: f64 = 0.5;
pub const CLUSTER_ATTEMPTS: u32 = 30;
pub const CLUSTER_FALLBACK_DISTANCE: f64 = 45.0;

/// Full width of the per-enemy jitter around a cluster centre.
pub const CLUSTER_SPREAD: f64 = 5.0;
pub const ENEMY_PLACEMENT_ATTEMPTS: u32 = 10;

/// Minimum spacing between freshly placed enemies.
pub const MIN_SPAWN_SEPARATION: f64 = 3.0;

pub const BOSS_MIN_DISTANCE: f64 = 30.0;
pub const BOSS_MAX_DISTANCE: f64 = 60.0;
pub const BOSS_PLACEMENT_ATTEMPTS: u32 = 50;
pub const BOSS_FALLBACK_DISTANCE: f64 = 50.0;

// --- Pickups ---

/// Planar distance at which the player collects a pickup.
pub const PICKUP_RADIUS: f64 = 1.5;

/// Pickups appear this far along +X from the player.
pub const PICKUP_OFFSET_X: f64 = 3.0;

pub const PICKUP_HEIGHT: f64 = 0.5;

/// How long transient HUD messages stay up (ms).
pub const MESSAGE_DURATION_MS: u64 = 1500;
