//! Presentation and UI seams.
//!
//! The simulation never draws anything; it reports spawns, removals and UI
//! changes as events in each snapshot. `dispatch_events` routes those events
//! to whatever front end the host runs.

use std::collections::BTreeMap;

use depthstrike_core::enums::{EntityKind, ScreenLayout};
use depthstrike_core::events::{Appearance, PresentationEvent, UiEvent, VisualHandle};
use depthstrike_core::state::GameStateSnapshot;
use depthstrike_core::types::Position;

/// Scene graph side: one visual per simulated entity.
pub trait Presentation {
    fn spawn_visual(
        &mut self,
        handle: VisualHandle,
        kind: EntityKind,
        appearance: &Appearance,
        position: Position,
    );

    fn destroy_visual(&mut self, handle: VisualHandle);

    /// Draw one frame from the current snapshot.
    fn render_frame(&mut self, snapshot: &GameStateSnapshot);
}

/// Score labels and screen panels.
pub trait UiSink {
    fn set_score_text(&mut self, text: &str);
    fn set_high_score(&mut self, high_score: u32);
    fn set_final_score(&mut self, final_score: u32);
    fn apply_layout(&mut self, layout: ScreenLayout);
}

/// A complete front end.
pub trait Frontend: Presentation + UiSink {}

impl<T: Presentation + UiSink> Frontend for T {}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Route a snapshot's events to the front end, then render it.
pub fn dispatch_events<F: Frontend + ?Sized>(snapshot: &GameStateSnapshot, frontend: &mut F) {
    for event in &snapshot.presentation_events {
        match event {
            PresentationEvent::Spawned {
                handle,
                kind,
                appearance,
                position,
            } => frontend.spawn_visual(*handle, *kind, appearance, *position),
            PresentationEvent::Despawned { handle } => frontend.destroy_visual(*handle),
        }
    }

    for event in &snapshot.ui_events {
        match event {
            UiEvent::ScoreChanged { score } => frontend.set_score_text(&score_text(*score)),
            UiEvent::HighScoreChanged { high_score } => frontend.set_high_score(*high_score),
            UiEvent::Layout { layout } => frontend.apply_layout(*layout),
            UiEvent::GameOver { final_score, .. } => frontend.set_final_score(*final_score),
        }
    }

    frontend.render_frame(snapshot);
}

/// Front end that writes everything to the log.
#[derive(Debug, Default)]
pub struct LogPresenter {
    live: BTreeMap<VisualHandle, EntityKind>,
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals currently on screen.
    pub fn live_visuals(&self) -> usize {
        self.live.len()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presentation for LogPresenter {
    fn spawn_visual(
        &mut self,
        handle: VisualHandle,
        kind: EntityKind,
        appearance: &Appearance,
        position: Position,
    ) {
        log::debug!(
            "spawn {kind:?} #{} at ({:.2}, {:.2}): {appearance:?}",
            handle.0,
            position.x,
            position.z
        );
        self.live.insert(handle, kind);
    }

    fn destroy_visual(&mut self, handle: VisualHandle) {
        match self.live.remove(&handle) {
            Some(kind) => log::debug!("destroy {kind:?} #{}", handle.0),
            None => log::warn!("destroy for unknown visual #{}", handle.0),
        }
    }

    fn render_frame(&mut self, snapshot: &GameStateSnapshot) {
        self.frames += 1;
        log::trace!(
            "frame {}: tick={} bullets={} enemies={} starfield={:.1}",
            self.frames,
            snapshot.time.tick,
            snapshot.bullets.len(),
            snapshot.enemies.len(),
            snapshot.starfield_offset
        );
    }
}

impl UiSink for LogPresenter {
    fn set_score_text(&mut self, text: &str) {
        log::debug!("{text}");
    }

    fn set_high_score(&mut self, high_score: u32) {
        log::info!("High score: {high_score}");
    }

    fn set_final_score(&mut self, final_score: u32) {
        log::info!("Final score: {final_score}");
    }

    fn apply_layout(&mut self, layout: ScreenLayout) {
        let panels = layout.visibility();
        log::info!(
            "layout {layout:?}: start_screen={} game_over={} overlay={}",
            panels.start_screen,
            panels.game_over_screen,
            panels.overlay
        );
    }
}
