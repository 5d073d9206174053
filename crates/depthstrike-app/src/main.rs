use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use depthstrike_app::autopilot::{Autopilot, InputDriver};
use depthstrike_app::game_loop::TICK_DURATION;
use depthstrike_app::persistence::JsonFileStore;
use depthstrike_app::presentation::LogPresenter;
use depthstrike_app::session::{run_session, SessionReport};
use depthstrike_app::settings::{AppSettings, SettingsError};
use depthstrike_app::state::{AppState, HostError};
use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::enums::{GamePhase, VisualMode};

#[derive(Parser, Debug)]
#[command(name = "depthstrike")]
#[command(about = "Headless depth-axis shooter, flown by the autopilot")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ship color as #rrggbb
    #[arg(long)]
    ship_color: Option<String>,
    /// Visual mode: baseline or enhanced
    #[arg(long)]
    visual_mode: Option<VisualMode>,
    #[arg(long)]
    seed: Option<u64>,
    /// High-score file
    #[arg(long)]
    high_score_file: Option<PathBuf>,
    /// Stop after this many ticks (0 = until game over)
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Run on the paced 60Hz game loop thread instead of as fast as possible
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn resolve_settings(cli: &Cli) -> Result<AppSettings, SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => AppSettings::load_from_file(path)?,
        None => AppSettings::default(),
    };
    if let Some(color) = &cli.ship_color {
        settings.set_ship_color(color)?;
    }
    if let Some(mode) = cli.visual_mode {
        settings.visual_mode = mode;
    }
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(path) = &cli.high_score_file {
        settings.high_score_path = path.clone();
    }
    if let Some(max_ticks) = cli.max_ticks {
        settings.max_ticks = max_ticks;
    }
    Ok(settings)
}

fn run_realtime(settings: AppSettings) -> Result<SessionReport, HostError> {
    let limit = settings.tick_limit();
    let store = JsonFileStore::new(settings.high_score_path.clone());
    let state = AppState::new();
    let handle = state.start(settings, store, LogPresenter::new())?;
    state.send_command(PlayerCommand::StartGame)?;

    let mut pilot = Autopilot::new();
    let mut last_tick = None;
    let mut starting_high = None;
    let mut report = SessionReport::default();
    loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = state.snapshot()? else {
            continue;
        };
        let high_at_start = *starting_high.get_or_insert(snapshot.high_score);
        if snapshot.phase == GamePhase::Idle || last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        report.ticks = snapshot.time.tick;
        report.final_score = snapshot.score;
        report.high_score = snapshot.high_score;
        if snapshot.phase == GamePhase::GameOver {
            report.game_over = true;
            report.new_record = snapshot.score > high_at_start;
            break;
        }
        if limit.is_some_and(|limit| report.ticks >= limit) {
            break;
        }
        for command in pilot.drive(&snapshot) {
            state.send_command(command)?;
        }
    }

    state.shutdown()?;
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
    }
    Ok(report)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("bad settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "depthstrike: mode={:?} color={} seed={}",
        settings.visual_mode,
        settings.ship_color,
        settings.seed
    );

    let report = if cli.realtime {
        match run_realtime(settings) {
            Ok(report) => report,
            Err(e) => {
                log::error!("game loop failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut store = JsonFileStore::new(settings.high_score_path.clone());
        run_session(&settings, &mut store, &mut Autopilot::new(), &mut LogPresenter::new())
    };

    log::info!(
        "session over after {} ticks: score={} high_score={} new_record={}",
        report.ticks,
        report.final_score,
        report.high_score,
        report.new_record
    );
    ExitCode::SUCCESS
}
