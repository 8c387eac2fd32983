//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};

use holdout_core::commands::{InputFrame, PlayerCommand};
use holdout_core::events::EventSink;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::SimConfig;

use crate::game_loop;

/// Messages sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Replace the held input for subsequent ticks.
    Input(InputFrame),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` covers state that does not exist before `start`
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the loop thread
pub struct AppState {
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if it is already running.
    pub fn start<S>(&self, config: SimConfig, sink: S) -> Result<()>
    where
        S: EventSink + Send + 'static,
    {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("simulation already running");
        }

        let cmd_tx = game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot), sink);

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward a message to the game loop thread.
    pub fn send(&self, command: GameLoopCommand) -> Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("simulation not started"),
        }
    }

    /// Latest published snapshot, if any tick has run yet.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop and forget the sender.
    pub fn stop(&self) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if !*running {
            return Ok(());
        }
        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        if let Some(tx) = tx_lock.take() {
            // The loop may already have exited on its own.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        *running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::events::GameEvent;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap_err();
        assert!(err.to_string().contains("not started"));
        assert!(state.stop().is_ok());
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        state
            .start(SimConfig::default(), Vec::<GameEvent>::new())
            .unwrap();
        assert!(state
            .start(SimConfig::default(), Vec::<GameEvent>::new())
            .is_err());
        state.stop().unwrap();
        assert!(state.command_tx.lock().unwrap().is_none());
    }
}
