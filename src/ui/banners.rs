//! Outcome banners shown when an attempt ends.
//!
//! A collision gets a red banner and a short screen flash; reaching the
//! target gets a green banner with the points earned.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::levels::LevelTable;
use crate::outcome::Outcome;
use crate::session::{AdvanceLevel, GameSession, HudSnapshot, RestartLevel};

use super::icons;

/// Seconds the collision flash takes to fade.
const FLASH_SECONDS: f32 = 0.3;

/// Resource for banner animation state.
#[derive(Resource, Default)]
pub struct BannerState {
    /// Outcome seen on the previous frame.
    pub last_outcome: Outcome,
    /// Collision flash strength (1.0 to 0.0).
    pub collision_flash: f32,
}

/// Colors for banners.
mod colors {
    use bevy_egui::egui::Color32;

    pub const FAILURE_BG: Color32 = Color32::from_rgba_premultiplied(60, 20, 20, 250);
    pub const FAILURE_BORDER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SUCCESS_BG: Color32 = Color32::from_rgba_premultiplied(30, 60, 40, 240);
    pub const SUCCESS_BORDER: Color32 = Color32::from_rgb(85, 176, 85);
}

/// Which button a banner offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerAction {
    Restart,
    Advance,
}

/// Text and action of the banner for a finished attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerContent {
    pub success: bool,
    pub title: String,
    pub detail: String,
    pub action: BannerAction,
    pub action_label: &'static str,
}

/// Build the banner for the current HUD state, if the attempt is over.
pub fn banner_content(hud: &HudSnapshot) -> Option<BannerContent> {
    match hud.outcome {
        Outcome::Playing => None,
        Outcome::Failure => Some(BannerContent {
            success: false,
            title: "Collision!".to_string(),
            detail: "Your ship was destroyed. Press R to try again.".to_string(),
            action: BannerAction::Restart,
            action_label: "Restart",
        }),
        Outcome::Success => {
            let award = hud.last_award.unwrap_or(0.0);
            let (detail, action_label) = if hud.has_next_level {
                (
                    format!("+{award:.0} points. Press Enter for the next level."),
                    "Next level",
                )
            } else {
                (
                    format!(
                        "+{award:.0} points. Final score {:.0}. Press Enter for a new game.",
                        hud.score
                    ),
                    "New game",
                )
            };
            Some(BannerContent {
                success: true,
                title: format!("{} complete!", hud.level_name),
                detail,
                action: BannerAction::Advance,
                action_label,
            })
        }
    }
}

/// System to start the collision flash when an attempt fails.
pub fn update_banner_state(session: Res<GameSession>, mut banner_state: ResMut<BannerState>) {
    let outcome = session.state.outcome;
    if outcome == banner_state.last_outcome {
        return;
    }

    if outcome == Outcome::Failure {
        banner_state.collision_flash = 1.0;
    } else if outcome == Outcome::Playing {
        banner_state.collision_flash = 0.0;
    }
    banner_state.last_outcome = outcome;
}

/// System to animate banner effects.
pub fn animate_banners(time: Res<Time>, mut banner_state: ResMut<BannerState>) {
    if banner_state.collision_flash > 0.0 {
        banner_state.collision_flash -= time.delta_secs() / FLASH_SECONDS;
        banner_state.collision_flash = banner_state.collision_flash.max(0.0);
    }
}

/// System to render the outcome banner.
pub fn banner_system(
    mut contexts: EguiContexts,
    session: Res<GameSession>,
    table: Res<LevelTable>,
    banner_state: Res<BannerState>,
    mut restart: MessageWriter<RestartLevel>,
    mut advance: MessageWriter<AdvanceLevel>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(content) = session.hud(&table).as_ref().and_then(banner_content) else {
        return;
    };

    if banner_state.collision_flash > 0.0 {
        let alpha = (banner_state.collision_flash * 0.4 * 255.0) as u8;
        egui::Area::new(egui::Id::new("collision_flash"))
            .fixed_pos(egui::pos2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.painter().rect_filled(
                    ui.ctx().viewport_rect(),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(255, 0, 0, alpha),
                );
            });
    }

    let (bg, border, icon) = if content.success {
        (colors::SUCCESS_BG, colors::SUCCESS_BORDER, icons::SUCCESS)
    } else {
        (colors::FAILURE_BG, colors::FAILURE_BORDER, icons::WARNING)
    };

    egui::TopBottomPanel::top("outcome_banner")
        .frame(
            egui::Frame::NONE
                .fill(bg)
                .inner_margin(egui::Margin::symmetric(16, 12))
                .stroke(egui::Stroke::new(2.0, border)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(icons::icon_colored(icon, 18.0, border));
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&content.title)
                            .strong()
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(&content.detail).size(14.0));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(
                        egui::RichText::new(content.action_label)
                            .size(14.0)
                            .color(egui::Color32::WHITE),
                    )
                    .min_size(egui::vec2(80.0, 28.0));

                    if ui.add(button).clicked() {
                        match content.action {
                            BannerAction::Restart => {
                                restart.write(RestartLevel);
                            }
                            BannerAction::Advance => {
                                advance.write(AdvanceLevel);
                            }
                        }
                    }
                });
            });
        });
}
