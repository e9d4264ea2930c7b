//! Rendering systems for the gravity-well game.
//!
//! Everything is drawn with Bevy gizmos straight from the session each
//! frame: the target zone, body trails, bodies and the ship. Rendering
//! never mutates simulation state.

pub mod bodies;
mod trails;

use bevy::math::DVec2;
use bevy::prelude::*;

use self::bodies::{draw_bodies, draw_ship, draw_target};
use self::trails::draw_trails;

/// Background colour of the playfield.
pub const BACKGROUND: Color = Color::srgb(10.0 / 255.0, 10.0 / 255.0, 25.0 / 255.0);

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .init_resource::<RenderSettings>()
            // Back to front: target, trails, bodies, ship
            .add_systems(
                Update,
                (draw_target, draw_trails, draw_bodies, draw_ship).chain(),
            );
    }
}

/// Visual settings for the playfield.
#[derive(Resource, Clone, Debug)]
pub struct RenderSettings {
    /// Whether body trails are drawn.
    pub show_trails: bool,
    /// Alpha of the oldest trail segment; the newest is opaque.
    pub trail_min_alpha: f32,
    /// Spacing between the concentric rings that fill a body disc.
    pub fill_spacing: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_trails: true,
            trail_min_alpha: 0.05,
            fill_spacing: 1.5,
        }
    }
}

/// Convert a world position to gizmo coordinates.
#[inline]
pub fn to_render(pos: DVec2) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}
