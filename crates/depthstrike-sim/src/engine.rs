//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering or I/O), enabling deterministic testing.

use std::collections::VecDeque;
use std::time::Duration;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::components::SpawnSeq;
use depthstrike_core::enums::{EntityKind, GamePhase, Key, ScreenLayout, VisualMode};
use depthstrike_core::events::{Appearance, PresentationEvent, UiEvent, VisualHandle};
use depthstrike_core::state::GameStateSnapshot;
use depthstrike_core::types::{Position, SimTime};

use crate::session::{InputState, ScoreState, SessionSettings};
use crate::systems;
use crate::systems::enemy_spawner::SpawnTimer;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::starfield::Starfield;
use crate::world_setup::{self, EnemySpawn};

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// High score loaded from persistent storage.
    pub high_score: u32,
    /// Wall-clock time between enemy spawns.
    pub spawn_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            high_score: 0,
            spawn_interval: SpawnTimer::default().interval(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_seq: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    presentation_events: Vec<PresentationEvent>,
    ui_events: Vec<UiEvent>,

    input: InputState,
    settings: SessionSettings,
    /// Visual mode of the running session (fixed at start).
    visual_mode: VisualMode,
    ship: Option<Entity>,
    score: ScoreState,
    spawn_timer: SpawnTimer,
    starfield: Starfield,
}

impl SimulationEngine {
    /// Create a new engine on the start screen.
    pub fn new(config: SimConfig) -> Self {
        let score = ScoreState::with_high_score(config.high_score);
        let ui_events = vec![
            UiEvent::HighScoreChanged {
                high_score: score.high_score,
            },
            UiEvent::Layout {
                layout: ScreenLayout::Start,
            },
        ];

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            presentation_events: Vec::new(),
            ui_events,
            input: InputState::default(),
            settings: SessionSettings::default(),
            visual_mode: VisualMode::default(),
            ship: None,
            score,
            spawn_timer: SpawnTimer::new(config.spawn_interval),
            starfield: Starfield::default(),
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

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Outside `Active` nothing in the world changes; the snapshot is still
    /// produced so the host can keep rendering.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
        }

        self.snapshot()
    }

    /// Feed wall-clock time to the enemy spawn timer, spawning one enemy per
    /// elapsed interval. Returns how many enemies were spawned.
    pub fn advance_spawn_clock(&mut self, elapsed: Duration) -> u32 {
        if self.phase != GamePhase::Active {
            return 0;
        }
        let due = self.spawn_timer.advance(elapsed);
        for _ in 0..due {
            self.spawn_enemy();
        }
        due
    }

    /// Spawn one random enemy at the far edge. No-op unless a session is active.
    pub fn spawn_enemy(&mut self) -> Option<VisualHandle> {
        if self.phase != GamePhase::Active {
            return None;
        }
        let params = world_setup::roll_enemy(&mut self.rng, self.visual_mode);
        Some(self.spawn_enemy_with(&params))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn high_score(&self) -> u32 {
        self.score.high_score
    }

    /// Visual mode of the current (or last) session.
    pub fn visual_mode(&self) -> VisualMode {
        self.visual_mode
    }

    /// Start-screen choices that the next session will use.
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn starfield_offset(&self) -> f64 {
        self.starfield.offset
    }

    pub fn spawn_timer_running(&self) -> bool {
        self.spawn_timer.is_running()
    }

    /// Current ship position, if a ship exists.
    pub fn ship_position(&self) -> Option<Position> {
        let ship = self.ship?;
        self.world.get::<&Position>(ship).ok().map(|pos| *pos)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy with exact parameters (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, x: f64, z: f64, speed: f64) -> Entity {
        let params = EnemySpawn::baseline(x, z, speed);
        let seq = self.alloc_seq();
        let entity = world_setup::spawn_enemy(&mut self.world, seq, &params);
        self.emit_spawned(
            seq,
            EntityKind::Enemy,
            Appearance::Enemy { look: None },
            Position::new(x, 0.0, z),
        );
        entity
    }

    /// Spawn a bullet at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, x: f64, z: f64) -> Entity {
        let seq = self.alloc_seq();
        let ship_pos = Position::new(x, 0.0, z + depthstrike_core::constants::BULLET_SPAWN_OFFSET_Z);
        let bullet = world_setup::spawn_bullet(&mut self.world, seq, &ship_pos);
        self.emit_spawned(
            seq,
            EntityKind::Bullet,
            Appearance::Bullet,
            Position::new(x, 0.0, z),
        );
        bullet
    }

    /// Teleport the ship laterally (for tests).
    #[cfg(test)]
    pub fn set_ship_x(&mut self, x: f64) {
        if let Some(ship) = self.ship {
            if let Ok(mut pos) = self.world.get::<&mut Position>(ship) {
                pos.x = x;
            }
        }
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
            PlayerCommand::KeyDown { key } => {
                let was_held = self.input.press(key);
                if key == Key::Fire && !was_held {
                    self.fire();
                }
            }
            PlayerCommand::KeyUp { key } => {
                self.input.release(key);
            }
            PlayerCommand::SetShipColor { color } => {
                self.settings.ship_color = color;
            }
            PlayerCommand::SetVisualMode { mode } => {
                self.settings.visual_mode = mode;
            }
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Idle {
                    self.start_session();
                }
            }
            PlayerCommand::RestartGame => {
                if self.phase == GamePhase::GameOver {
                    self.return_to_start();
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.visual_mode = self.settings.visual_mode;
        self.time = SimTime::default();
        self.score.score = 0;
        self.starfield.reset();

        let seq = self.alloc_seq();
        let color = self.settings.ship_color;
        let ship = world_setup::spawn_ship(&mut self.world, seq, color, self.visual_mode);
        let position = world_setup::ship_origin();
        self.ship = Some(ship);
        self.emit_spawned(
            seq,
            EntityKind::Ship,
            Appearance::Ship {
                color,
                mode: self.visual_mode,
            },
            position,
        );

        self.spawn_timer.start();
        self.phase = GamePhase::Active;

        self.ui_events.push(UiEvent::Layout {
            layout: ScreenLayout::Playing,
        });
        self.ui_events.push(UiEvent::ScoreChanged { score: 0 });

        log::info!(
            "session started: mode={:?} color={}",
            self.visual_mode,
            color
        );
    }

    fn return_to_start(&mut self) {
        self.spawn_timer.stop();
        systems::cleanup::clear_world(&mut self.world, &mut self.presentation_events);
        self.despawn_buffer.clear();
        self.ship = None;
        self.phase = GamePhase::Idle;
        self.ui_events.push(UiEvent::Layout {
            layout: ScreenLayout::Start,
        });
        log::info!("returned to start screen");
    }

    /// Fire one bullet from the ship's nose. Only while a session is active.
    fn fire(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        let Some(ship_pos) = self.ship_position() else {
            return;
        };
        let seq = self.alloc_seq();
        world_setup::spawn_bullet(&mut self.world, seq, &ship_pos);
        self.emit_spawned(
            seq,
            EntityKind::Bullet,
            Appearance::Bullet,
            world_setup::bullet_origin(&ship_pos),
        );
    }

    fn spawn_enemy_with(&mut self, params: &EnemySpawn) -> VisualHandle {
        let seq = self.alloc_seq();
        world_setup::spawn_enemy(&mut self.world, seq, params);
        log::debug!(
            "enemy spawned: x={:.2} speed={:.3}",
            params.x,
            params.speed
        );
        self.emit_spawned(
            seq,
            EntityKind::Enemy,
            Appearance::Enemy { look: params.look },
            Position::new(params.x, 0.0, params.z),
        )
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        self.time.advance();

        // 1. Ship steering
        if let Some(ship) = self.ship {
            systems::ship_control::run(&mut self.world, ship, &self.input);
        }
        // 2. Bullet advance
        systems::movement::advance_bullets(&mut self.world, &mut self.despawn_buffer);
        // 3. Enemy advance + ship collision
        let ship_box = self
            .ship
            .and_then(|ship| systems::collision::world_box(&self.world, ship));
        let rammed = systems::movement::advance_enemies(
            &mut self.world,
            ship_box.as_ref(),
            &mut self.despawn_buffer,
        );
        if rammed.is_some() {
            self.cleanup();
            self.trigger_game_over();
            return;
        }
        // 4. Bullet–enemy hits
        let kills = systems::collision::resolve_bullet_hits(&self.world, &mut self.despawn_buffer);
        if kills > 0 {
            self.score.score += kills;
            self.ui_events.push(UiEvent::ScoreChanged {
                score: self.score.score,
            });
        }
        // 5. Cleanup
        self.cleanup();
        // 6. Starfield
        if self.visual_mode.is_enhanced() {
            self.starfield.scroll();
        }
    }

    fn cleanup(&mut self) {
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.presentation_events,
        );
    }

    fn trigger_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.spawn_timer.stop();

        let new_record = self.score.settle();
        self.ui_events.push(UiEvent::GameOver {
            final_score: self.score.score,
            high_score: self.score.high_score,
            new_record,
        });
        self.ui_events.push(UiEvent::HighScoreChanged {
            high_score: self.score.high_score,
        });
        self.ui_events.push(UiEvent::Layout {
            layout: ScreenLayout::GameOver,
        });

        log::info!(
            "game over at tick {}: score={} high_score={} new_record={}",
            self.time.tick,
            self.score.score,
            self.score.high_score,
            new_record
        );
    }

    fn alloc_seq(&mut self) -> SpawnSeq {
        let seq = SpawnSeq(self.next_seq);
        self.next_seq += 1;
        seq
    }

    fn emit_spawned(
        &mut self,
        seq: SpawnSeq,
        kind: EntityKind,
        appearance: Appearance,
        position: Position,
    ) -> VisualHandle {
        let handle = VisualHandle(seq.0);
        self.presentation_events.push(PresentationEvent::Spawned {
            handle,
            kind,
            appearance,
            position,
        });
        handle
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let presentation_events = std::mem::take(&mut self.presentation_events);
        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                visual_mode: self.visual_mode,
                ship: self.ship,
                score: &self.score,
                starfield_offset: self.starfield.offset,
            },
            presentation_events,
            ui_events,
        )
    }
}
