//! Deferred actions keyed on the simulation clock.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Actions fire at the
//! start of the first tick whose clock has reached their deadline. Ties
//! fire in scheduling order. Every action carries enough identity for the
//! handler to check that its target is still what it expects.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use glam::DVec2;

/// Work to perform once a deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeferredAction {
    /// Put an enemy back where it stood before its attack lunge.
    LungeRevert {
        entity: hecs::Entity,
        origin: DVec2,
    },
    /// Despawn a dead enemy's corpse.
    RemoveCorpse {
        entity: hecs::Entity,
    },
    /// Start the given wave if the director is still waiting for it.
    StartNextWave {
        wave: u32,
    },
    /// Update the between-wave countdown text.
    WaveCountdown {
        wave: u32,
        seconds_left: u64,
    },
    /// Hide the HUD message if it is still the one with this sequence number.
    ClearMessage {
        message_seq: u64,
    },
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    action: DeferredAction,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Min-heap of deferred actions ordered by `(due_ms, sequence)`.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire once the clock reaches `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, action: DeferredAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            due_ms,
            seq,
            action,
        }));
    }

    /// Pop the earliest action whose deadline is at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<DeferredAction> {
        match self.queue.peek() {
            Some(Reverse(next)) if next.due_ms <= now_ms => {
                self.queue.pop().map(|Reverse(s)| s.action)
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
