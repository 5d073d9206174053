//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use depthstrike_core::components::*;
use depthstrike_core::enums::{GamePhase, VisualMode};
use depthstrike_core::events::{PresentationEvent, UiEvent, VisualHandle};
use depthstrike_core::state::*;
use depthstrike_core::types::{Position, SimTime};

use crate::session::ScoreState;

/// Engine state that is not stored in the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub visual_mode: VisualMode,
    pub ship: Option<Entity>,
    pub score: &'a ScoreState,
    pub starfield_offset: f64,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    presentation_events: Vec<PresentationEvent>,
    ui_events: Vec<UiEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        visual_mode: ctx.visual_mode,
        ship: ctx.ship.and_then(|ship| build_ship(world, ship)),
        bullets: build_bullets(world),
        enemies: build_enemies(world),
        score: ctx.score.score,
        high_score: ctx.score.high_score,
        starfield_offset: ctx.starfield_offset,
        presentation_events,
        ui_events,
    }
}

fn build_ship(world: &World, ship: Entity) -> Option<ShipView> {
    let mut query = world.query_one::<(&SpawnSeq, &Position)>(ship).ok()?;
    query.get().map(|(seq, pos)| ShipView {
        handle: VisualHandle(seq.0),
        position: *pos,
    })
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(SpawnSeq, BulletView)> = world
        .query::<(&Bullet, &SpawnSeq, &Position)>()
        .iter()
        .map(|(_, (_, seq, pos))| {
            (
                *seq,
                BulletView {
                    handle: VisualHandle(seq.0),
                    position: *pos,
                },
            )
        })
        .collect();
    bullets.sort_unstable_by_key(|(seq, _)| *seq);
    bullets.into_iter().map(|(_, view)| view).collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(SpawnSeq, EnemyView)> = world
        .query::<(&Enemy, &SpawnSeq, &Position, &Speed, Option<&EnemyLook>, Option<&Spin>)>()
        .iter()
        .map(|(_, (_, seq, pos, speed, look, spin))| {
            (
                *seq,
                EnemyView {
                    handle: VisualHandle(seq.0),
                    position: *pos,
                    speed: speed.0,
                    look: look.copied(),
                    spin: spin.copied(),
                },
            )
        })
        .collect();
    enemies.sort_unstable_by_key(|(seq, _)| *seq);
    enemies.into_iter().map(|(_, view)| view).collect()
}
