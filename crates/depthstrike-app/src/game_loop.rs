//! Game loop thread: runs the simulation engine at 60Hz.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Each snapshot is routed to the front end
//! and stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use depthstrike_core::constants::TICK_RATE;
use depthstrike_core::state::GameStateSnapshot;
use depthstrike_sim::engine::SimulationEngine;

use crate::persistence::{self, HighScoreStore};
use crate::presentation::{self, Frontend};
use crate::settings::AppSettings;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the store and front
/// end back once the loop stops.
pub fn spawn_game_loop<S, F>(
    settings: AppSettings,
    store: S,
    frontend: F,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<(S, F)>)>
where
    S: HighScoreStore + Send + 'static,
    F: Frontend + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("depthstrike-game-loop".into())
        .spawn(move || {
            let mut store = store;
            let mut frontend = frontend;
            run_game_loop(&settings, &mut store, &mut frontend, cmd_rx, &latest_snapshot);
            (store, frontend)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: HighScoreStore, F: Frontend>(
    settings: &AppSettings,
    store: &mut S,
    frontend: &mut F,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let high_score = persistence::load_or_default(store);
    let mut engine = SimulationEngine::new(settings.sim_config(high_score));
    engine.queue_commands(settings.start_screen_commands());

    let mut next_tick_time = Instant::now();
    let mut last_clock = next_tick_time;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Feed wall-clock time to the spawn timer
        let now = Instant::now();
        engine.advance_spawn_clock(now - last_clock);
        last_clock = now;

        // 3. Advance one tick
        let snapshot = engine.tick();

        // 4. Route events to the front end and persist new records
        presentation::dispatch_events(&snapshot, frontend);
        persistence::persist_new_record(&snapshot.ui_events, store);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::presentation::LogPresenter;
    use depthstrike_core::commands::PlayerCommand;
    use depthstrike_core::enums::GamePhase;

    fn wait_for<T>(
        slot: &Mutex<Option<GameStateSnapshot>>,
        mut check: impl FnMut(&GameStateSnapshot) -> Option<T>,
    ) -> Option<T> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(found) = slot.lock().unwrap().as_ref().and_then(&mut check) {
                return Some(found);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::RestartGame))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::RestartGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_starts_ticks_and_shuts_down() {
        let slot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            AppSettings::default(),
            MemoryStore::with_high_score(3),
            LogPresenter::new(),
            slot.clone(),
        )
        .unwrap();

        let idle_high = wait_for(&slot, |snap| Some(snap.high_score));
        assert_eq!(idle_high, Some(3));

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        let ticked = wait_for(&slot, |snap| {
            (snap.phase == GamePhase::Active && snap.time.tick >= 5).then_some(())
        });
        assert!(ticked.is_some(), "game loop never reached tick 5");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let (store, frontend) = handle.join().unwrap();
        assert_eq!(store.saves, 0);
        assert!(frontend.frames() >= 5);
        assert!(frontend.live_visuals() >= 1, "ship visual should be live");
    }

    #[test]
    fn test_loop_exits_on_disconnect() {
        let slot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            AppSettings::default(),
            MemoryStore::default(),
            LogPresenter::new(),
            slot,
        )
        .unwrap();
        drop(tx);
        assert!(handle.join().is_ok());
    }
}
