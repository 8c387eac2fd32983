//! Simulation engine: the game session controller.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::{InputFrame, PlayerCommand};
use holdout_core::components::Enemy;
use holdout_core::config::GameConfig;
use holdout_core::enums::{GamePhase, WeaponKind};
use holdout_core::events::{EventSink, GameEvent};
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::{Position, SimTime};

use crate::director::{WaveDirector, WaveOutcome, WaveStart};
use crate::messages::MessageBoard;
use crate::player::PlayerState;
use crate::schedule::{DeferredAction, Scheduler};
use crate::systems;
use crate::systems::combat::KillContext;
use crate::systems::spawner::WavePlan;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: GameConfig,
    input: InputFrame,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    player: PlayerState,
    director: WaveDirector,
    scheduler: Scheduler,
    messages: MessageBoard,
    next_enemy_id: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let game = config.game;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputFrame::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: PlayerState::new(&game.player),
            director: WaveDirector::new(game.waves.max_waves()),
            scheduler: Scheduler::new(),
            messages: MessageBoard::default(),
            next_enemy_id: 0,
            config: game,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held input. Look deltas are consumed by the next active tick.
    pub fn set_input(&mut self, input: InputFrame) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.director,
            self.messages.current(),
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Spawn a stationary bullet (for tests that place hits directly).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, position: Position, damage: i32) -> Entity {
        crate::world_setup::spawn_bullet(
            &mut self.world,
            glam::DVec3::new(position.x, position.y, position.z),
            glam::DVec3::Z,
            0.0,
            damage,
            self.time.now_ms(),
            self.config.timing.bullet_lifetime_ms,
        )
    }

    /// Spawn an enemy with no start delay (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: holdout_core::enums::EnemyKind,
        x: f64,
        z: f64,
    ) -> Entity {
        let (entity, _, _) = crate::world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            kind,
            glam::DVec2::new(x, z),
            0.0,
        );
        entity
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                _ => {}
            },
            PlayerCommand::SwitchWeapon { weapon } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if weapon.uses_ammo() && self.player.ammo(weapon) == 0 {
                    return;
                }
                self.player.equip(weapon, &mut self.events);
            }
            PlayerCommand::SkipWave => {
                if self.phase == GamePhase::Active {
                    self.skip_wave();
                }
            }
        }
    }

    /// Reset everything and start wave 1.
    fn start_session(&mut self) {
        systems::cleanup::remove_all_enemies(&mut self.world, &mut self.events);
        self.world.clear();
        self.despawn_buffer.clear();
        self.scheduler.clear();
        self.messages.reset();
        self.time = SimTime::default();
        self.player = PlayerState::new(&self.config.player);
        self.director = WaveDirector::new(self.config.waves.max_waves());
        self.phase = GamePhase::Active;

        self.events.emit(GameEvent::ScoreChanged { score: 0, delta: 0 });
        self.events.emit(GameEvent::WeaponChanged {
            weapon: WeaponKind::Pistol,
        });
        log::info!("session started");
        self.start_wave();
    }

    /// Ask the director for the current wave and spawn it.
    fn start_wave(&mut self) {
        match self.director.start_wave(&self.config.waves) {
            WaveStart::Ignored => {}
            WaveStart::GameComplete => self.win(),
            WaveStart::Started {
                wave,
                regulars,
                bosses,
            } => {
                let plan = WavePlan {
                    regulars,
                    bosses,
                    stagger_ms: self.config.waves.spawn_stagger_ms,
                };
                systems::spawner::spawn_wave(
                    &mut self.world,
                    &mut self.rng,
                    &self.config.layout,
                    self.player.position.planar(),
                    plan,
                    &mut self.next_enemy_id,
                    &mut self.events,
                );
                log::info!(
                    "wave {wave} started: {} enemies ({bosses} boss)",
                    self.director.zombies_remaining
                );
                self.events.emit(self.director.changed_event());
                let text = if self.director.is_final_wave() {
                    format!("Wave {wave} Started! The boss is coming!")
                } else {
                    format!("Wave {wave} Started!")
                };
                self.show_message(text);
            }
        }
    }

    /// Debug action: clear the running wave and complete it.
    fn skip_wave(&mut self) {
        if !self.director.skip() {
            return;
        }
        let removed = systems::cleanup::remove_all_enemies(&mut self.world, &mut self.events);
        self.events.emit(self.director.changed_event());
        log::info!(
            "wave {} skipped ({removed} enemies removed)",
            self.director.current_wave
        );
        self.player.add_score(self.config.waves.skip_wave_bonus, &mut self.events);
        self.show_message("Wave Skipped!");
        self.check_waves();
    }

    fn show_message(&mut self, text: impl Into<String>) {
        self.messages.show(
            text,
            self.time.now_ms(),
            self.config.timing.message_duration_ms,
            &mut self.scheduler,
            &mut self.events,
        );
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "game over on wave {} with score {}",
            self.director.current_wave,
            self.player.score
        );
        self.events.emit(GameEvent::GameOver {
            score: self.player.score,
            wave: self.director.current_wave,
        });
    }

    fn win(&mut self) {
        self.phase = GamePhase::Won;
        log::info!("all waves cleared with score {}", self.player.score);
        self.events.emit(GameEvent::GameWon {
            score: self.player.score,
        });
        self.show_message("You survived!");
    }

    /// Fire every deferred action whose deadline has passed.
    fn run_deferred(&mut self, now_ms: u64) {
        while let Some(action) = self.scheduler.pop_due(now_ms) {
            match action {
                DeferredAction::LungeRevert { entity, origin } => {
                    let alive = self
                        .world
                        .get::<&Enemy>(entity)
                        .map(|enemy| enemy.state.is_alive())
                        .unwrap_or(false);
                    if alive {
                        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                            pos.x = origin.x;
                            pos.z = origin.y;
                        }
                    }
                }
                DeferredAction::RemoveCorpse { entity } => {
                    let dying = self
                        .world
                        .get::<&Enemy>(entity)
                        .map(|enemy| !enemy.state.is_alive())
                        .unwrap_or(false);
                    if dying {
                        systems::cleanup::remove_enemy(&mut self.world, entity, &mut self.events);
                    }
                }
                DeferredAction::StartNextWave { wave } => {
                    if self.director.take_pending_start(wave) {
                        self.start_wave();
                    }
                }
                DeferredAction::WaveCountdown { wave, seconds_left } => {
                    if self.director.is_waiting_for(wave) {
                        self.show_message(format!("Wave {wave} starts in {seconds_left}..."));
                    }
                }
                DeferredAction::ClearMessage { message_seq } => {
                    self.messages.expire(message_seq, &mut self.events);
                }
            }
        }
    }

    /// Wave completion step, shared by the tick and the skip action.
    fn check_waves(&mut self) {
        let outcome = systems::waves::run(
            &mut self.world,
            &mut self.director,
            &mut self.player,
            &mut self.scheduler,
            &mut self.messages,
            &self.config,
            self.time.now_ms(),
            &mut self.events,
        );
        if let Some(WaveOutcome::Won { .. }) = outcome {
            self.win();
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.now_ms();
        let dt = self.time.dt();

        // 0. Deferred actions due by now
        self.run_deferred(now_ms);
        if self.phase != GamePhase::Active {
            return;
        }
        // 1. Player movement and look
        systems::player_movement::run(
            &mut self.player,
            &self.input,
            &self.config.layout,
            &self.config.player,
            dt,
        );
        self.input.look_dx = 0.0;
        self.input.look_dy = 0.0;
        // 2. Shooting
        systems::weapons::run(
            &mut self.world,
            &mut self.player,
            self.input.fire_held,
            &self.config.weapons,
            &self.config.timing,
            &mut self.rng,
            now_ms,
            &mut self.events,
        );
        // 3. Bullet integration and expiry
        systems::bullets::run(&mut self.world, now_ms, dt, &mut self.despawn_buffer);
        // 4. Enemies
        let player_killed = systems::enemy_ai::run(
            &mut self.world,
            &self.config.layout,
            &mut self.player,
            &mut self.scheduler,
            &self.config.timing,
            now_ms,
            dt,
            &mut self.events,
        );
        if player_killed {
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            self.game_over();
            return;
        }
        // 5. Combat resolution
        let mut ctx = KillContext {
            director: &mut self.director,
            player: &mut self.player,
            scheduler: &mut self.scheduler,
            timing: &self.config.timing,
            now_ms,
            events: &mut self.events,
        };
        systems::combat::run(&mut self.world, &mut ctx, &mut self.despawn_buffer);
        // 6. Wave completion
        self.check_waves();
        if self.phase != GamePhase::Active {
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            return;
        }
        // 7. Pickups
        systems::pickups::run(
            &mut self.world,
            &mut self.player,
            &mut self.scheduler,
            &mut self.messages,
            &self.config,
            now_ms,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 8. Cleanup (consumed/expired bullets, collected pickups)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
