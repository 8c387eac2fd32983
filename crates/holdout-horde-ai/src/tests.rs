#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use holdout_core::constants::*;
    use holdout_core::enums::{EnemyKind, EnemyState};
    use holdout_core::types::Position;

    use crate::fsm::{evaluate, facing_for, wander_direction, EnemyContext};
    use crate::profiles::get_profile;

    /// Enemy at (0, h, distance) with the player at the origin.
    fn make_context(kind: EnemyKind, state: EnemyState, distance: f64) -> EnemyContext {
        EnemyContext {
            kind,
            state,
            position: Position::new(0.0, get_profile(kind).base_height, distance),
            player_position: Position::new(0.0, PLAYER_HEIGHT, 0.0),
            player_targetable: true,
            start_delay_ms: 0.0,
            wander_offset: 0.0,
            now_secs: 0.0,
        }
    }

    #[test]
    fn test_pursue_inside_detection_range() {
        let ctx = make_context(EnemyKind::Regular, EnemyState::Wandering, 20.0);
        let d = evaluate(&ctx);
        assert_eq!(d.new_state, EnemyState::Pursuing);
        assert!(d.state_changed);
        assert!(!d.attack);
        assert_abs_diff_eq!(d.move_direction.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.speed, ZOMBIE_SPEED, epsilon = 1e-12);
    }

    #[test]
    fn test_wander_outside_detection_range() {
        let ctx = make_context(EnemyKind::Regular, EnemyState::Pursuing, 30.0);
        let d = evaluate(&ctx);
        assert_eq!(d.new_state, EnemyState::Wandering);
        assert!(d.facing.is_none());
        assert_abs_diff_eq!(d.speed, ZOMBIE_SPEED * WANDER_SPEED_FACTOR, epsilon = 1e-12);
        assert_abs_diff_eq!(d.move_direction.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_height_ignored_for_detection() {
        let mut ctx = make_context(EnemyKind::Regular, EnemyState::Wandering, 29.0);
        ctx.position.y = 500.0;
        assert_eq!(evaluate(&ctx).new_state, EnemyState::Pursuing);
    }

    #[test]
    fn test_attack_inside_attack_range() {
        let ctx = make_context(EnemyKind::Regular, EnemyState::Pursuing, 1.5);
        let d = evaluate(&ctx);
        assert_eq!(d.new_state, EnemyState::Attacking);
        assert!(d.attack);
    }

    #[test]
    fn test_boss_attacks_from_further_and_moves_slower() {
        let ctx = make_context(EnemyKind::Boss, EnemyState::Pursuing, 7.0);
        let d = evaluate(&ctx);
        assert!(d.attack);
        let boss_speed = ZOMBIE_SPEED * BOSS_SPEED_MULTIPLIER;
        assert_abs_diff_eq!(d.speed, boss_speed, epsilon = 1e-12);

        let regular = evaluate(&make_context(EnemyKind::Regular, EnemyState::Pursuing, 7.0));
        assert!(!regular.attack);
    }

    #[test]
    fn test_no_attack_when_player_not_targetable() {
        let mut ctx = make_context(EnemyKind::Regular, EnemyState::Pursuing, 1.0);
        ctx.player_targetable = false;
        let d = evaluate(&ctx);
        assert!(!d.attack);
        assert_eq!(d.new_state, EnemyState::Pursuing);
    }

    #[test]
    fn test_dead_states_are_terminal() {
        for state in [EnemyState::Dying, EnemyState::Removed] {
            let d = evaluate(&make_context(EnemyKind::Regular, state, 1.0));
            assert_eq!(d.new_state, state);
            assert!(!d.attack);
            assert!(!d.is_moving());
            assert!(!d.state_changed);
        }
    }

    #[test]
    fn test_start_delay_holds_spawned() {
        let mut ctx = make_context(EnemyKind::Regular, EnemyState::Spawned, 1.0);
        ctx.start_delay_ms = 250.0;
        let d = evaluate(&ctx);
        assert_eq!(d.new_state, EnemyState::Spawned);
        assert!(!d.attack);
        assert!(!d.is_moving());

        ctx.start_delay_ms = 0.0;
        assert_eq!(evaluate(&ctx).new_state, EnemyState::Attacking);
    }

    #[test]
    fn test_facing_points_at_player() {
        let ctx = make_context(EnemyKind::Regular, EnemyState::Pursuing, 10.0);
        let d = evaluate(&ctx);
        // Moving toward -Z.
        assert_abs_diff_eq!(d.facing.unwrap().abs(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(facing_for(DVec2::X), FRAC_PI_2);
    }

    #[test]
    fn test_wander_heading_rotates_with_time() {
        let a = wander_direction(0.0, 0.0);
        let b = wander_direction(1.0, 0.0);
        assert_abs_diff_eq!(a.y, 1.0, epsilon = 1e-12);
        assert!(a.distance(b) > 0.1);
        // Offset shifts the heading for a given time.
        assert!(wander_direction(1.0, 1.0).distance(b) > 0.1);
    }

    #[test]
    fn test_profiles() {
        let regular = get_profile(EnemyKind::Regular);
        let boss = get_profile(EnemyKind::Boss);
        assert!(regular.one_hit_kill);
        assert!(!boss.one_hit_kill);
        assert_eq!(regular.kill_score, 10);
        assert_eq!(boss.kill_score, 100);
        assert_abs_diff_eq!(regular.hit_radius, 1.5);
        assert_abs_diff_eq!(boss.hit_radius, 5.0);
        assert!(boss.max_health > regular.max_health);
    }
}
