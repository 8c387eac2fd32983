//! Shared actor state: health with a post-hit invulnerability window.

use serde::{Deserialize, Serialize};

/// Hit points for the player and enemies.
///
/// `current` always stays within `0..=max`. A hit landing within
/// `cooldown_ms` of the previous accepted hit is rejected; a cooldown of
/// zero accepts every hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    pub last_damage_ms: Option<u64>,
    pub cooldown_ms: u64,
}

impl Health {
    pub fn new(max: i32, cooldown_ms: u64) -> Self {
        let max = max.max(0);
        Self {
            current: max,
            max,
            last_damage_ms: None,
            cooldown_ms,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Whether a hit at `now_ms` would be inside the invulnerability window.
    pub fn is_invulnerable(&self, now_ms: u64) -> bool {
        if self.cooldown_ms == 0 {
            return false;
        }
        match self.last_damage_ms {
            Some(last) => now_ms.saturating_sub(last) <= self.cooldown_ms,
            None => false,
        }
    }

    /// Apply `amount` damage. Returns false when the hit was rejected by the
    /// cooldown gate. Negative amounts are treated as zero.
    pub fn take_damage(&mut self, amount: i32, now_ms: u64) -> bool {
        if self.is_invulnerable(now_ms) {
            return false;
        }
        self.current = (self.current - amount.max(0)).clamp(0, self.max);
        self.last_damage_ms = Some(now_ms);
        true
    }

    /// Drop straight to zero, bypassing the cooldown.
    pub fn force_kill(&mut self, now_ms: u64) {
        self.current = 0;
        self.last_damage_ms = Some(now_ms);
    }

    /// Health as a fraction of max in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f64 / self.max as f64
    }
}
