//! Orbit Pilot - Gravity Well Navigation Game
//!
//! Fly a small ship through the gravity of stars and planets to a target
//! zone, dropping extra bodies into the field to bend your path.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;

use orbit_pilot::camera::CameraPlugin;
use orbit_pilot::input::InputPlugin;
use orbit_pilot::physics::PhysicsPlugin;
use orbit_pilot::render::RenderPlugin;
use orbit_pilot::session::SessionPlugin;
use orbit_pilot::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit Pilot".into(),
                resolution: WindowResolution::new(1200, 800),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Simulation before presentation
        .add_plugins((PhysicsPlugin, SessionPlugin, InputPlugin))
        .add_plugins((CameraPlugin, RenderPlugin, UiPlugin))
        .run();
}
