//! Presentation sink for the headless driver: turns game events into log lines.

use holdout_core::events::{EventSink, GameEvent};

/// Logs notable events at `info` and per-entity chatter at `debug`.
#[derive(Debug, Default)]
pub struct LogSink {
    /// Events seen so far.
    pub received: u64,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: GameEvent) {
        self.received += 1;
        match &event {
            GameEvent::WaveChanged {
                wave,
                max_waves,
                zombies_remaining,
            } => log::info!("wave {wave}/{max_waves}: {zombies_remaining} zombies"),
            GameEvent::WaveCompleted { wave, bonus } => {
                log::info!("wave {wave} cleared (+{bonus})")
            }
            GameEvent::PlayerDamaged { amount, health, .. } => {
                log::info!("player hit for {amount}, health {health}")
            }
            GameEvent::PickupCollected { kind, ammo } => {
                log::info!("picked up {kind:?} with {ammo} rounds")
            }
            GameEvent::GameOver { score, wave } => {
                log::info!("game over on wave {wave} with {score} points")
            }
            GameEvent::GameWon { score } => log::info!("survived with {score} points"),
            GameEvent::Message { text } => log::info!("> {text}"),
            other => log::debug!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_counts_events() {
        let mut sink = LogSink::default();
        sink.emit(GameEvent::MessageCleared);
        sink.emit(GameEvent::GameWon { score: 10 });
        assert_eq!(sink.received, 2);
    }
}
