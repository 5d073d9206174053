//! Application state shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::state::GameStateSnapshot;

use crate::game_loop;
use crate::persistence::HighScoreStore;
use crate::presentation::Frontend;
use crate::settings::AppSettings;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("shared state lock poisoned")]
    Poisoned,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that may not exist before `start`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
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

    /// Start the game loop thread. Fails if one is already running.
    pub fn start<S, F>(
        &self,
        settings: AppSettings,
        store: S,
        frontend: F,
    ) -> Result<JoinHandle<(S, F)>, HostError>
    where
        S: HighScoreStore + Send + 'static,
        F: Frontend + Send + 'static,
    {
        let mut running = self.running.lock().map_err(|_| HostError::Poisoned)?;
        if *running {
            return Err(HostError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(settings, store, frontend, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| HostError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *running = true;

        Ok(handle)
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), HostError> {
        self.send(GameLoopCommand::Player(command))
    }

    /// Forward a raw key event by key name. Returns `Ok(false)` for keys the
    /// game does not bind.
    pub fn send_key(&self, name: &str, pressed: bool) -> Result<bool, HostError> {
        match PlayerCommand::from_key_event(name, pressed) {
            Some(command) => self.send_command(command).map(|()| true),
            None => Ok(false),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, HostError> {
        let lock = self.latest_snapshot.lock().map_err(|_| HostError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Ask the game loop to stop. The sender is dropped either way.
    pub fn shutdown(&self) -> Result<(), HostError> {
        let result = self.send(GameLoopCommand::Shutdown);
        if let Ok(mut tx_lock) = self.command_tx.lock() {
            *tx_lock = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
        result
    }

    fn send(&self, command: GameLoopCommand) -> Result<(), HostError> {
        let tx_lock = self.command_tx.lock().map_err(|_| HostError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| HostError::Disconnected),
            None => Err(HostError::NotStarted),
        }
    }
}
