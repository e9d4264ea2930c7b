//! Body, ship and target zone drawing.

use bevy::prelude::*;

use crate::session::GameSession;
use crate::types::{BodyKind, Ship, ShipInput};

use super::{RenderSettings, to_render};

/// Get the visual color for a body kind.
pub fn body_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Star => Color::srgb_u8(255, 200, 80),
        BodyKind::Planet => Color::srgb_u8(135, 206, 250),
        BodyKind::Moon => Color::srgb_u8(190, 190, 190),
        BodyKind::Light => Color::srgb_u8(173, 216, 230),
        BodyKind::Massive => Color::srgb_u8(255, 140, 0),
        BodyKind::Ship => Color::srgb_u8(255, 99, 71),
    }
}

/// Vertices of the ship triangle: nose, then the two side corners.
///
/// The nose sits 2.5 radii ahead along the heading, the corners 1.5 radii
/// to either side.
pub fn ship_outline(pos: Vec2, orientation: f32, radius: f32) -> [Vec2; 3] {
    let heading = Vec2::from_angle(orientation);
    let side = heading.perp();
    let length = radius * 2.5;
    let width = radius * 1.5;
    [pos + heading * length, pos - side * width, pos + side * width]
}

/// Radii of the concentric rings used to fake a filled disc.
pub fn fill_radii(radius: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let spacing = spacing.max(0.5);
    let rings = (radius / spacing).ceil().max(1.0) as u32;
    (0..rings).map(move |i| radius - i as f32 * spacing)
}

/// Draw every celestial body as a filled disc.
pub fn draw_bodies(
    mut gizmos: Gizmos,
    session: Res<GameSession>,
    settings: Res<RenderSettings>,
) {
    let Some(world) = session.world.as_ref() else {
        return;
    };

    for body in &world.bodies {
        let center = to_render(body.pos);
        let color = body_color(body.kind);
        for r in fill_radii(body.radius as f32, settings.fill_spacing) {
            gizmos.circle_2d(Isometry2d::from_translation(center), r, color);
        }
    }
}

/// Draw the ship as a triangle pointing along its heading, with a flame
/// while the main engine fires.
pub fn draw_ship(mut gizmos: Gizmos, session: Res<GameSession>, input: Res<ShipInput>) {
    let Some(world) = session.world.as_ref() else {
        return;
    };

    let ship = &world.ship;
    let center = to_render(ship.body.pos);
    let [nose, left, right] = ship_outline(
        center,
        ship.control.orientation as f32,
        ship.body.radius as f32,
    );
    let color = body_color(BodyKind::Ship);
    gizmos.linestrip_2d([nose, left, right, nose], color);

    if engine_firing(ship, &input, session.state.outcome.is_frozen()) {
        let heading = Vec2::from_angle(ship.control.orientation as f32);
        let length = ship.body.radius as f32 * 1.8 * input.thrust.signum() as f32;
        let tail = center - heading * length;
        gizmos.line_2d(center, tail, Color::srgb_u8(255, 180, 60));
    }
}

/// Whether the main engine is visibly firing this frame.
fn engine_firing(ship: &Ship, input: &ShipInput, frozen: bool) -> bool {
    !frozen && input.thrust != 0.0 && ship.control.fuel > 0.0
}

/// Draw the target zone as a translucent ring with a marked centre.
pub fn draw_target(mut gizmos: Gizmos, session: Res<GameSession>) {
    let Some(world) = session.world.as_ref() else {
        return;
    };

    let center = to_render(world.target.center);
    let radius = world.target.radius as f32;
    let ring = Color::srgba_u8(200, 200, 255, 80);
    for r in fill_radii(radius, 4.0) {
        gizmos.circle_2d(Isometry2d::from_translation(center), r, ring);
    }
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        (radius * 0.2).max(2.0),
        Color::srgba_u8(255, 255, 255, 150),
    );
}
