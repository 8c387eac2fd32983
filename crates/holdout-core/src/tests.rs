#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use crate::actor::Health;
    use crate::boundary::{CollisionBoundary, WorldLayout};
    use crate::commands::{InputFrame, PlayerCommand};
    use crate::components::{Bullet, EnemyId};
    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{EventSink, GameEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_enemy_state_serde() {
        let variants = vec![
            EnemyState::Spawned,
            EnemyState::Pursuing,
            EnemyState::Wandering,
            EnemyState::Attacking,
            EnemyState::Dying,
            EnemyState::Removed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_kind_serde() {
        for v in [WeaponKind::Pistol, WeaponKind::Shotgun, WeaponKind::MachineGun] {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_state_liveness() {
        assert!(EnemyState::Spawned.is_alive());
        assert!(EnemyState::Attacking.is_alive());
        assert!(!EnemyState::Dying.is_alive());
        assert!(!EnemyState::Removed.is_alive());
    }

    #[test]
    fn test_pickup_maps_to_weapon() {
        assert_eq!(PickupKind::Shotgun.weapon(), WeaponKind::Shotgun);
        assert_eq!(PickupKind::MachineGun.weapon(), WeaponKind::MachineGun);
        assert!(!WeaponKind::Pistol.uses_ammo());
        assert!(WeaponKind::Shotgun.uses_ammo());
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::SwitchWeapon {
                weapon: WeaponKind::Shotgun,
            },
            PlayerCommand::TogglePause,
            PlayerCommand::SkipWave,
            PlayerCommand::Restart,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_player_command_tagged() {
        let json = serde_json::to_string(&PlayerCommand::SkipWave).unwrap();
        assert!(json.contains("\"type\":\"SkipWave\""));
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyDied {
                id: EnemyId(3),
                kind: EnemyKind::Boss,
                position: Position::new(1.0, 4.0, 2.0),
            },
            GameEvent::WaveCompleted { wave: 2, bonus: 100 },
            GameEvent::Message {
                text: "Shotgun acquired!".into(),
            },
            GameEvent::MessageCleared,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            assert!(json.contains("\"type\""));
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_vec_event_sink_collects_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.emit(GameEvent::ScoreChanged { score: 10, delta: 10 });
        sink.emit(GameEvent::MessageCleared);
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[1], GameEvent::MessageCleared));
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.enemies.is_empty());
        assert_eq!(back, snap);
    }

    #[test]
    fn test_snapshots_differ_by_clock() {
        let idle = GameStateSnapshot::default();
        let mut later = idle.clone();
        later.time.advance();
        assert_ne!(later, idle);
        assert_ne!(later.time, SimTime::default());
        later.time = SimTime::default();
        assert_eq!(later, idle);
    }

    #[test]
    fn test_input_frame_default_is_idle() {
        let input = InputFrame::default();
        assert_eq!(input.move_x, 0.0);
        assert!(!input.fire_held);
    }

    // --- Geometry ---

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 50.0, 4.0);
        assert_abs_diff_eq!(a.planar_distance_to(&b), 5.0, epsilon = 1e-12);
        assert!(a.distance_to(&b) > 50.0);
    }

    #[test]
    fn test_planar_direction_is_unit_or_zero() {
        let a = Position::new(1.0, 0.0, 1.0);
        let b = Position::new(4.0, 2.0, 5.0);
        let dir = a.planar_direction_to(&b);
        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.x, 0.6, epsilon = 1e-12);
        assert_eq!(a.planar_direction_to(&a), DVec2::ZERO);
    }

    #[test]
    fn test_velocity_speed() {
        assert_abs_diff_eq!(Velocity::new(3.0, 0.0, 4.0).speed(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sim_time_clock() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, 60);
        assert_eq!(t.now_ms(), 1000);
        assert_abs_diff_eq!(t.elapsed_secs, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bullet_expiry() {
        let bullet = Bullet {
            velocity: Velocity::default(),
            damage: 100,
            created_at_ms: 500,
            lifetime_ms: 2000,
        };
        assert!(!bullet.is_expired(2499));
        assert!(bullet.is_expired(2500));
    }

    // --- Health ---

    #[test]
    fn test_health_cooldown_gate() {
        let mut h = Health::new(100, 1000);
        assert!(h.take_damage(10, 0));
        assert_eq!(h.current, 90);
        assert!(!h.take_damage(10, 500));
        assert_eq!(h.current, 90);
        assert!(!h.take_damage(10, 1000));
        assert!(h.take_damage(10, 1001));
        assert_eq!(h.current, 80);
    }

    #[test]
    fn test_health_clamps_at_zero() {
        let mut h = Health::new(50, 0);
        assert!(h.take_damage(200, 0));
        assert_eq!(h.current, 0);
        assert!(h.is_dead());
        assert!(h.take_damage(-30, 1));
        assert_eq!(h.current, 0);
    }

    #[test]
    fn test_zero_cooldown_accepts_every_hit() {
        let mut h = Health::new(200, 0);
        assert!(h.take_damage(40, 100));
        assert!(h.take_damage(40, 100));
        assert_eq!(h.current, 120);
    }

    #[test]
    fn test_health_stays_in_bounds() {
        let mut h = Health::new(100, 0);
        for (i, amount) in [5, -10, 40, 0, 90, 7].into_iter().enumerate() {
            h.take_damage(amount, i as u64);
            assert!(h.current >= 0 && h.current <= h.max);
        }
        h.force_kill(5);
        assert_eq!(h.current, 0);
        assert_abs_diff_eq!(h.fraction(), 0.0);
    }

    // --- Boundaries ---

    #[test]
    fn test_can_occupy_pads_by_radius() {
        let layout = WorldLayout {
            boundaries: vec![CollisionBoundary::new(0.0, 2.0, 0.0, 2.0)],
            extent: 100.0,
        };
        assert!(!layout.can_occupy(1.0, 1.0, 0.0));
        assert!(!layout.can_occupy(2.4, 1.0, 0.5));
        assert!(layout.can_occupy(2.6, 1.0, 0.5));
        // Touching is not overlapping.
        assert!(layout.can_occupy(2.5, 1.0, 0.5));
    }

    #[test]
    fn test_move_unblocked_commits_full_step() {
        let layout = WorldLayout::open(100.0);
        let to = layout.move_with_avoidance(DVec2::ZERO, DVec2::new(3.0, 4.0), 1.0, 0.5);
        assert_abs_diff_eq!(to.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(to.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_move_slides_along_open_axis() {
        // Wall directly ahead on +Z; moving diagonally +X/+Z slides along X only.
        let layout = WorldLayout {
            boundaries: vec![CollisionBoundary::new(-10.0, 10.0, 1.0, 3.0)],
            extent: 100.0,
        };
        let from = DVec2::new(0.0, 0.0);
        let to = layout.move_with_avoidance(from, DVec2::new(1.0, 1.0), 1.0, 0.5);
        assert!(to.x > 0.0);
        assert_eq!(to.y, 0.0);
    }

    #[test]
    fn test_move_fully_blocked_stays_put() {
        let layout = WorldLayout {
            boundaries: vec![CollisionBoundary::new(0.6, 2.0, -2.0, 2.0)],
            extent: 100.0,
        };
        let from = DVec2::new(0.0, 0.0);
        let to = layout.move_with_avoidance(from, DVec2::new(1.0, 0.0), 1.0, 0.5);
        assert_eq!(to, from);
    }

    #[test]
    fn test_zero_direction_is_noop() {
        let layout = WorldLayout::village();
        let from = DVec2::new(0.0, 5.0);
        assert_eq!(
            layout.move_with_avoidance(from, DVec2::ZERO, 1.0, 0.5),
            from
        );
    }

    #[test]
    fn test_village_leaves_player_start_clear() {
        let layout = WorldLayout::village();
        assert!(!layout.boundaries.is_empty());
        assert!(layout.can_occupy(
            PLAYER_START_X,
            PLAYER_START_Z,
            PLAYER_COLLISION_RADIUS
        ));
    }

    // --- Config ---

    #[test]
    fn test_default_config_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.waves.zombies_per_wave, vec![12, 20, 28, 40, 1]);
        assert_eq!(config.waves.max_waves(), MAX_WAVES);
        assert_eq!(config.waves.count_for(1), 12);
        assert_eq!(config.waves.count_for(0), 0);
        assert_eq!(config.waves.count_for(6), 0);
        assert_eq!(config.weapons.stats(WeaponKind::MachineGun).damage, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GameConfig::from_json_str(r#"{"waves":{"zombies_per_wave":[3,1]}}"#).unwrap();
        assert_eq!(config.waves.max_waves(), 2);
        assert_eq!(config.player.max_health, PLAYER_MAX_HEALTH);
        assert_eq!(config.timing.wave_restart_delay_ms, WAVE_RESTART_DELAY_MS);
    }

    #[test]
    fn test_config_rejects_bad_tables() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{"waves":{"zombies_per_wave":[]}}"#),
            Err(ConfigError::EmptyWaveTable)
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"waves":{"zombies_per_wave":[4,0,1]}}"#),
            Err(ConfigError::EmptyWave(2))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"player":{"max_health":0}}"#),
            Err(ConfigError::NonPositiveHealth(0))
        ));
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
