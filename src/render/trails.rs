//! Trail rendering: fading polylines behind every moving body.

use bevy::prelude::*;

use crate::session::GameSession;
use crate::types::Body;

use super::bodies::body_color;
use super::{RenderSettings, to_render};

/// Draw the recorded trail of every body and the ship.
pub fn draw_trails(
    mut gizmos: Gizmos,
    session: Res<GameSession>,
    settings: Res<RenderSettings>,
) {
    if !settings.show_trails {
        return;
    }

    let Some(world) = session.world.as_ref() else {
        return;
    };

    for body in world.bodies.iter().chain(std::iter::once(&world.ship.body)) {
        draw_trail(&mut gizmos, body, settings.trail_min_alpha);
    }
}

/// Draw one trail, fading from transparent (oldest) to opaque (newest).
fn draw_trail(gizmos: &mut Gizmos, body: &Body, min_alpha: f32) {
    let len = body.trail.len();
    if len < 2 {
        return;
    }

    let base = body_color(body.kind);
    let points = body.trail.iter().map(|&p| to_render(p)).enumerate().map(|(i, p)| {
        let t = i as f32 / (len - 1) as f32;
        (p, base.with_alpha(min_alpha + (1.0 - min_alpha) * t))
    });
    gizmos.linestrip_gradient_2d(points);
}
