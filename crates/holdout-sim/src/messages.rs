//! Transient HUD message slot.

use holdout_core::events::{EventSink, GameEvent};

use crate::schedule::{DeferredAction, Scheduler};

/// One message at a time; a newer message replaces the current one and
/// only the newest message's expiry may clear the slot.
#[derive(Debug, Default)]
pub struct MessageBoard {
    current: Option<String>,
    seq: u64,
}

impl MessageBoard {
    /// Show `text` until `now_ms + duration_ms`.
    pub fn show(
        &mut self,
        text: impl Into<String>,
        now_ms: u64,
        duration_ms: u64,
        scheduler: &mut Scheduler,
        events: &mut impl EventSink,
    ) {
        let text = text.into();
        self.seq += 1;
        self.current = Some(text.clone());
        events.emit(GameEvent::Message { text });
        scheduler.schedule(
            now_ms + duration_ms,
            DeferredAction::ClearMessage {
                message_seq: self.seq,
            },
        );
    }

    /// Clear the slot if `message_seq` is still the one on display.
    pub fn expire(&mut self, message_seq: u64, events: &mut impl EventSink) {
        if message_seq == self.seq && self.current.take().is_some() {
            events.emit(GameEvent::MessageCleared);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
