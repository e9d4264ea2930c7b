//! Camera for the playfield.
//!
//! A single orthographic 2D camera centred on the playfield that always
//! keeps the whole 1200x800 world in view, whatever the window size.

use bevy::camera::ScalingMode;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::{WORLD_HEIGHT, WORLD_WIDTH};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Centre of the playfield in world units.
pub fn playfield_center() -> Vec2 {
    Vec2::new((WORLD_WIDTH / 2.0) as f32, (WORLD_HEIGHT / 2.0) as f32)
}

/// Spawn the main camera with an orthographic projection fitted to the playfield.
fn setup_camera(mut commands: Commands) {
    let center = playfield_center();
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: WORLD_WIDTH as f32,
                min_height: WORLD_HEIGHT as f32,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(center.x, center.y, 0.0),
        MainCamera,
    ));
}

/// Convert a cursor position in window pixels to world coordinates.
pub fn cursor_to_world(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor_pos: Vec2,
) -> Option<DVec2> {
    camera
        .viewport_to_world_2d(camera_transform, cursor_pos)
        .ok()
        .map(|p| DVec2::new(p.x as f64, p.y as f64))
}
