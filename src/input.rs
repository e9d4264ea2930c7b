//! Input handling for ship controls, level shortcuts and click-to-spawn.
//!
//! Held keys are sampled once per physics tick into `ShipInput`. One-shot
//! actions (restart, advance, spawn, quit) are turned into messages in
//! `Update` so they are never missed between fixed ticks.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{MainCamera, cursor_to_world};
use crate::session::{AdvanceLevel, RestartLevel, SpawnBody};
use crate::types::{GameSet, ShipInput, SpawnKind};

/// Plugin providing keyboard and mouse input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShipInput>()
            .add_systems(FixedUpdate, sample_ship_input.in_set(GameSet::Input))
            .add_systems(Update, (keyboard_shortcuts, mouse_spawn));
    }
}

/// Axis value from a pair of opposing key groups.
fn axis(keys: &ButtonInput<KeyCode>, positive: &[KeyCode], negative: &[KeyCode]) -> f64 {
    let mut value = 0.0;
    if keys.any_pressed(positive.iter().copied()) {
        value += 1.0;
    }
    if keys.any_pressed(negative.iter().copied()) {
        value -= 1.0;
    }
    value
}

/// Map the currently held keys to ship controls.
///
/// - Left / Right arrows: rotate counter-clockwise / clockwise
/// - Up / Down arrows, W / S: thrust forward / backward
/// - A / D: strafe left / right
pub fn ship_input_from_keys(keys: &ButtonInput<KeyCode>) -> ShipInput {
    ShipInput {
        rotate: axis(keys, &[KeyCode::ArrowLeft], &[KeyCode::ArrowRight]),
        thrust: axis(
            keys,
            &[KeyCode::ArrowUp, KeyCode::KeyW],
            &[KeyCode::ArrowDown, KeyCode::KeyS],
        ),
        strafe: axis(keys, &[KeyCode::KeyA], &[KeyCode::KeyD]),
    }
}

/// Sample held keys right before the physics step.
fn sample_ship_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<ShipInput>) {
    let sampled = ship_input_from_keys(&keys);
    if *input != sampled {
        *input = sampled;
    }
}

/// Handle keyboard shortcuts for level control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut restart: MessageWriter<RestartLevel>,
    mut advance: MessageWriter<AdvanceLevel>,
    mut exit: MessageWriter<AppExit>,
) {
    // R: reload the current level from its template
    if keys.just_pressed(KeyCode::KeyR) {
        restart.write(RestartLevel);
    }

    // Enter / N: next level (ignored unless the level was won)
    if keys.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter, KeyCode::KeyN]) {
        advance.write(AdvanceLevel);
    }

    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

/// Spawn a light body on left click and a massive body on right click.
fn mouse_spawn(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut spawn: MessageWriter<SpawnBody>,
    mut contexts: EguiContexts,
) {
    let kind = if mouse.just_pressed(MouseButton::Left) {
        SpawnKind::Light
    } else if mouse.just_pressed(MouseButton::Right) {
        SpawnKind::Massive
    } else {
        return;
    };

    // Clicks on the HUD are not spawn requests
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    let Some(pos) = cursor_to_world(camera, camera_transform, cursor_pos) else {
        return;
    };

    spawn.write(SpawnBody { pos, kind });
}
