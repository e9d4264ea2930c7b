//! Phosphor icon definitions for the UI.
//!
//! Icons become available once `setup_fonts` has run.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Icon text in a given size and colour.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

// Browse all icons at https://phosphoricons.com/

/// Ship speed
pub const SPEED: &str = egui_phosphor::regular::GAUGE;
/// Remaining fuel
pub const FUEL: &str = egui_phosphor::regular::GAS_PUMP;
/// Level indicator
pub const LEVEL: &str = egui_phosphor::regular::FLAG;
/// Accumulated score
pub const SCORE: &str = egui_phosphor::regular::TROPHY;
/// Attempt timer
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Objective line
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
/// Restart button
pub const RESTART: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Next level button
pub const NEXT: &str = egui_phosphor::regular::ARROW_RIGHT;
/// Key help
pub const KEYBOARD: &str = egui_phosphor::regular::KEYBOARD;
/// Collision banner
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Success banner
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
