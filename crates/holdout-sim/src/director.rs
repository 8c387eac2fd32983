//! Wave director: counts, progression and win condition.
//!
//! Pure bookkeeping. Spawning and rewards are carried out by the engine
//! and the wave systems based on what the director reports.

use holdout_core::config::WaveConfig;
use holdout_core::enums::WavePhase;
use holdout_core::events::GameEvent;
use holdout_core::state::WaveView;

/// What `start_wave` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveStart {
    /// Already running, between waves, or finished.
    Ignored,
    /// Every wave has been cleared.
    GameComplete,
    Started {
        wave: u32,
        regulars: u32,
        bosses: u32,
    },
}

/// What a completion check decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    /// A non-final wave was cleared; `next` starts after the restart delay.
    Advanced {
        completed: u32,
        next: u32,
    },
    /// The final wave was cleared.
    Won {
        completed: u32,
    },
}

#[derive(Debug, Clone)]
pub struct WaveDirector {
    /// 1-based. Already points at the next wave while transitioning.
    pub current_wave: u32,
    pub max_waves: u32,
    pub zombies_remaining: u32,
    pub is_wave_in_progress: bool,
    pub is_transitioning: bool,
    pub is_complete: bool,
}

impl WaveDirector {
    pub fn new(max_waves: u32) -> Self {
        Self {
            current_wave: 1,
            max_waves,
            zombies_remaining: 0,
            is_wave_in_progress: false,
            is_transitioning: false,
            is_complete: false,
        }
    }

    pub fn phase(&self) -> WavePhase {
        if self.is_complete {
            WavePhase::Complete
        } else if self.is_transitioning {
            WavePhase::Transitioning
        } else if self.is_wave_in_progress {
            WavePhase::InProgress
        } else {
            WavePhase::Idle
        }
    }

    pub fn is_final_wave(&self) -> bool {
        self.current_wave == self.max_waves
    }

    /// Begin the current wave. Sets the remaining count; the caller spawns.
    pub fn start_wave(&mut self, config: &WaveConfig) -> WaveStart {
        if self.is_wave_in_progress || self.is_transitioning || self.is_complete {
            return WaveStart::Ignored;
        }
        if self.current_wave > self.max_waves {
            self.is_complete = true;
            return WaveStart::GameComplete;
        }

        let count = config.count_for(self.current_wave);
        let (regulars, bosses) = if self.is_final_wave() {
            (config.final_wave_escort, count)
        } else {
            (count, 0)
        };

        self.zombies_remaining = regulars + bosses;
        self.is_wave_in_progress = true;
        WaveStart::Started {
            wave: self.current_wave,
            regulars,
            bosses,
        }
    }

    /// A kill was confirmed.
    pub fn on_kill(&mut self) {
        self.zombies_remaining = self.zombies_remaining.saturating_sub(1);
    }

    /// Trust the living count over the counter while a wave runs.
    /// Returns true when the counter had drifted.
    pub fn reconcile(&mut self, living: u32) -> bool {
        if !self.is_wave_in_progress || self.zombies_remaining == living {
            return false;
        }
        log::warn!(
            "wave {} counter drifted: {} remaining but {} alive",
            self.current_wave,
            self.zombies_remaining,
            living
        );
        self.zombies_remaining = living;
        true
    }

    /// Close the wave if nothing is left. Returns the outcome exactly once.
    pub fn check_completion(&mut self) -> Option<WaveOutcome> {
        if !self.is_wave_in_progress || self.zombies_remaining > 0 {
            return None;
        }
        self.is_wave_in_progress = false;
        let completed = self.current_wave;

        if completed >= self.max_waves {
            self.is_complete = true;
            return Some(WaveOutcome::Won { completed });
        }

        self.current_wave += 1;
        self.is_transitioning = true;
        Some(WaveOutcome::Advanced {
            completed,
            next: self.current_wave,
        })
    }

    /// Leave the transition if it is still waiting for `wave`.
    pub fn take_pending_start(&mut self, wave: u32) -> bool {
        if self.is_transitioning && !self.is_complete && self.current_wave == wave {
            self.is_transitioning = false;
            true
        } else {
            false
        }
    }

    /// Whether the between-wave countdown for `wave` is still relevant.
    pub fn is_waiting_for(&self, wave: u32) -> bool {
        self.is_transitioning && self.current_wave == wave
    }

    /// Debug skip: zero the counter. Only valid while a wave runs.
    pub fn skip(&mut self) -> bool {
        if !self.is_wave_in_progress {
            return false;
        }
        self.zombies_remaining = 0;
        true
    }

    /// HUD update for the current wave and its remaining count.
    pub fn changed_event(&self) -> GameEvent {
        GameEvent::WaveChanged {
            wave: self.current_wave,
            max_waves: self.max_waves,
            zombies_remaining: self.zombies_remaining,
        }
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            current_wave: self.current_wave,
            max_waves: self.max_waves,
            zombies_remaining: self.zombies_remaining,
            phase: self.phase(),
        }
    }
}
