use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use holdout_app::sink::LogSink;
use holdout_app::state::{AppState, GameLoopCommand};
use holdout_core::commands::{InputFrame, PlayerCommand};
use holdout_core::config::GameConfig;
use holdout_core::enums::GamePhase;
use holdout_sim::SimConfig;

/// How long to let an unattended session run.
const DEFAULT_RUN_SECS: u64 = 60;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Usage: `holdout-app [config.json] [seconds]`
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let mut args = std::env::args().skip(1);
    let game = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => GameConfig::default(),
    };
    let run_for = match args.next() {
        Some(secs) => secs
            .parse::<u64>()
            .with_context(|| format!("invalid run length {secs:?}"))?,
        None => DEFAULT_RUN_SECS,
    };

    let state = AppState::new();
    state.start(
        SimConfig {
            game,
            ..Default::default()
        },
        LogSink::default(),
    )?;

    // Stand still, turn slowly and keep the trigger held.
    state.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))?;
    state.send(GameLoopCommand::Input(InputFrame {
        look_dx: 3.0,
        fire_held: true,
        ..Default::default()
    }))?;

    let deadline = Instant::now() + Duration::from_secs(run_for);
    let mut last = None;
    while Instant::now() < deadline {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = state.snapshot()? else {
            continue;
        };
        let finished = matches!(snapshot.phase, GamePhase::GameOver | GamePhase::Won);
        last = Some(snapshot);
        if finished {
            break;
        }
    }
    state.stop()?;

    if let Some(snapshot) = last {
        log::info!(
            "session ended: {:?}, wave {}, score {}, health {}",
            snapshot.phase,
            snapshot.wave.current_wave,
            snapshot.player.score,
            snapshot.player.health
        );
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GameConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
