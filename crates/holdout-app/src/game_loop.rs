//! Game loop thread. Runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread and never shared. Commands and
//! input arrive via an `mpsc` channel. Each tick's events go to the
//! presentation sink and the snapshot is stored for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use holdout_core::constants::TICK_RATE;
use holdout_core::events::EventSink;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_game_loop<S>(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    mut sink: S,
) -> mpsc::Sender<GameLoopCommand>
where
    S: EventSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("holdout-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, &latest_snapshot, &mut sink);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// Drain pending messages into the engine. Returns false when the loop
/// should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    sink: &mut impl EventSink,
) {
    let mut next_tick_time = Instant::now();
    log::debug!("game loop started");

    loop {
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // Pause is handled inside the engine.
        let snapshot = engine.tick();

        for event in &snapshot.events {
            sink.emit(event.clone());
        }

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }

    log::debug!("game loop stopped at tick {}", engine.time().tick);
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::commands::{InputFrame, PlayerCommand};
    use holdout_core::enums::GamePhase;
    use holdout_core::events::GameEvent;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputFrame::default()))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(_)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick().phase, GamePhase::Active);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_events() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let latest = Arc::new(Mutex::new(None));
        let loop_latest = Arc::clone(&latest);
        let handle = std::thread::spawn(move || {
            let mut sink: Vec<GameEvent> = Vec::new();
            run_game_loop(
                SimulationEngine::new(SimConfig::default()),
                rx,
                &loop_latest,
                &mut sink,
            );
            sink
        });

        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let events = handle.join().unwrap();

        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::WaveChanged { wave: 1, .. })));
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick >= 1);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        // Run enough ticks to populate entities
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
