//! Heads-up display: flight readouts, progress and key help.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::levels::LevelTable;
use crate::outcome::Outcome;
use crate::session::{AdvanceLevel, GameSession, HudSnapshot, RestartLevel};

use super::icons;

/// Fuel fraction below which the gauge turns orange.
const LOW_FUEL: f64 = 0.2;

/// Key bindings listed in the help section.
pub const KEY_HELP: [(&str, &str); 7] = [
    ("\u{2190} \u{2192}", "Rotate"),
    ("\u{2191} \u{2193} / W S", "Thrust"),
    ("A D", "Strafe"),
    ("Left / right click", "Drop light / massive body"),
    ("R", "Restart level"),
    ("Enter", "Next level"),
    ("Esc", "Quit"),
];

/// Format seconds as `m:ss.s`.
pub fn format_elapsed(seconds: f64) -> String {
    // Round first so 59.96 carries into the minute
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let minutes = tenths / 600;
    let rest = tenths % 600;
    format!("{}:{:02}.{}", minutes, rest / 10, rest % 10)
}

/// Gauge colour for a fuel fraction.
pub fn fuel_color(fraction: f64) -> egui::Color32 {
    if fraction > LOW_FUEL {
        egui::Color32::from_rgb(100, 200, 100)
    } else {
        egui::Color32::from_rgb(255, 150, 50)
    }
}

/// System to render the HUD panel.
pub fn hud_system(
    mut contexts: EguiContexts,
    session: Res<GameSession>,
    table: Res<LevelTable>,
    mut restart: MessageWriter<RestartLevel>,
    mut advance: MessageWriter<AdvanceLevel>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(hud) = session.hud(&table) else {
        return;
    };

    egui::Window::new("flight_hud")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .default_width(230.0)
        .show(ctx, |ui| {
            render_progress(ui, &hud);
            ui.separator();
            render_flight(ui, &hud);
            ui.separator();
            render_buttons(ui, &hud, &mut restart, &mut advance);
            ui.separator();
            render_key_help(ui);
        });
}

fn render_progress(ui: &mut egui::Ui, hud: &HudSnapshot) {
    ui.horizontal(|ui| {
        ui.label(icons::LEVEL);
        ui.label(
            egui::RichText::new(format!(
                "Level {}/{}: {}",
                hud.level_index + 1,
                hud.level_count,
                hud.level_name
            ))
            .strong(),
        );
    });
    ui.horizontal_wrapped(|ui| {
        ui.label(icons::TARGET);
        ui.label(egui::RichText::new(hud.objective).weak());
    });
    ui.horizontal(|ui| {
        ui.label(icons::SCORE);
        ui.label(format!("Score: {:.0}", hud.score));
        ui.add_space(12.0);
        ui.label(icons::CLOCK);
        ui.label(format_elapsed(hud.elapsed));
    });
}

fn render_flight(ui: &mut egui::Ui, hud: &HudSnapshot) {
    ui.horizontal(|ui| {
        ui.label(icons::SPEED);
        ui.label(format!("Speed: {:.1}", hud.speed));
    });
    ui.horizontal(|ui| {
        ui.label(icons::FUEL);
        ui.add(
            egui::ProgressBar::new(hud.fuel_fraction as f32)
                .text(format!("{:.0}", hud.fuel))
                .fill(fuel_color(hud.fuel_fraction)),
        );
    });
}

fn render_buttons(
    ui: &mut egui::Ui,
    hud: &HudSnapshot,
    restart: &mut MessageWriter<RestartLevel>,
    advance: &mut MessageWriter<AdvanceLevel>,
) {
    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Restart", icons::RESTART))
            .on_hover_text("R")
            .clicked()
        {
            restart.write(RestartLevel);
        }

        let won = hud.outcome == Outcome::Success;
        if ui
            .add_enabled(won, egui::Button::new(format!("{} Next", icons::NEXT)))
            .on_hover_text("Enter")
            .clicked()
        {
            advance.write(AdvanceLevel);
        }
    });
}

fn render_key_help(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new(format!("{} Controls", icons::KEYBOARD))
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("key_help").num_columns(2).show(ui, |ui| {
                for (keys, action) in KEY_HELP {
                    ui.label(egui::RichText::new(keys).monospace());
                    ui.label(action);
                    ui.end_row();
                }
            });
        });
}
