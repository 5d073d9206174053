//! Cleanup system: removes entities marked during the tick.

use hecs::{Entity, World};

use depthstrike_core::components::SpawnSeq;
use depthstrike_core::events::{PresentationEvent, VisualHandle};

/// Despawn everything in the buffer in one pass and tell the presentation
/// layer about each removal. The buffer is left empty.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<PresentationEvent>,
) {
    for entity in despawn_buffer.drain(..) {
        let seq = match world.get::<&SpawnSeq>(entity) {
            Ok(seq) => *seq,
            Err(_) => continue,
        };
        if world.despawn(entity).is_ok() {
            events.push(PresentationEvent::Despawned {
                handle: VisualHandle(seq.0),
            });
        }
    }
}

/// Despawn every entity in the world, oldest first.
pub fn clear_world(world: &mut World, events: &mut Vec<PresentationEvent>) {
    let mut all: Vec<(SpawnSeq, Entity)> = world
        .query_mut::<&SpawnSeq>()
        .into_iter()
        .map(|(entity, seq)| (*seq, entity))
        .collect();
    all.sort_unstable_by_key(|(seq, _)| *seq);

    let mut buffer: Vec<Entity> = all.into_iter().map(|(_, entity)| entity).collect();
    run(world, &mut buffer, events);
    world.clear();
}
