//! Player-spawned bodies.
//!
//! Clicking drops a light or massive body at the cursor with zero velocity.
//! Overlap with existing bodies is allowed; the epsilon-skip keeps the
//! gravity sum finite even for coincident bodies.

use bevy::math::DVec2;

use crate::config::SpawnPresets;
use crate::types::{Body, BodyKind, SpawnKind};
use crate::world::SimWorld;

/// Build a preset body of the given kind at rest at `pos`.
pub fn make_spawned_body(pos: DVec2, kind: SpawnKind, presets: &SpawnPresets) -> Body {
    let preset = presets.get(kind);
    let (name, body_kind) = match kind {
        SpawnKind::Light => ("Custom Planet", BodyKind::Light),
        SpawnKind::Massive => ("Custom Giant", BodyKind::Massive),
    };
    Body::new(name, body_kind, pos, DVec2::ZERO, preset.mass, preset.radius)
}

/// Add a preset body to the live world and return its index.
pub fn spawn_body(world: &mut SimWorld, pos: DVec2, kind: SpawnKind, presets: &SpawnPresets) -> usize {
    world.bodies.push(make_spawned_body(pos, kind, presets));
    world.bodies.len() - 1
}
