//! Synchronous session runner.
//!
//! Same steps as the game loop thread but unpaced: each tick feeds the spawn
//! clock one nominal tick of time, so a run is fully determined by the seed
//! and the input driver.

use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::enums::GamePhase;
use depthstrike_core::events::UiEvent;
use depthstrike_sim::engine::SimulationEngine;

use crate::autopilot::InputDriver;
use crate::game_loop::TICK_DURATION;
use crate::persistence::{self, HighScoreStore};
use crate::presentation::{self, Frontend};
use crate::settings::AppSettings;

/// Outcome of one headless session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub ticks: u64,
    pub final_score: u32,
    pub high_score: u32,
    pub new_record: bool,
    /// False when the tick limit ended the session before game over.
    pub game_over: bool,
}

/// Play one session from the start screen until game over or the tick limit.
pub fn run_session<S, D, F>(
    settings: &AppSettings,
    store: &mut S,
    driver: &mut D,
    frontend: &mut F,
) -> SessionReport
where
    S: HighScoreStore,
    D: InputDriver + ?Sized,
    F: Frontend + ?Sized,
{
    let high_score = persistence::load_or_default(store);
    let mut engine = SimulationEngine::new(settings.sim_config(high_score));
    engine.queue_commands(settings.start_screen_commands());
    engine.queue_command(PlayerCommand::StartGame);

    let limit = settings.tick_limit();
    let mut report = SessionReport {
        high_score,
        ..Default::default()
    };

    loop {
        engine.advance_spawn_clock(TICK_DURATION);
        let snapshot = engine.tick();
        presentation::dispatch_events(&snapshot, frontend);
        persistence::persist_new_record(&snapshot.ui_events, store);

        report.ticks = snapshot.time.tick;
        report.final_score = snapshot.score;
        report.high_score = snapshot.high_score;

        if snapshot.phase == GamePhase::GameOver {
            report.game_over = true;
            report.new_record = snapshot
                .ui_events
                .iter()
                .any(|e| matches!(e, UiEvent::GameOver { new_record: true, .. }));
            break;
        }
        if limit.is_some_and(|limit| report.ticks >= limit) {
            log::info!("tick limit reached at score {}", report.final_score);
            break;
        }

        engine.queue_commands(driver.drive(&snapshot));
    }

    report
}
