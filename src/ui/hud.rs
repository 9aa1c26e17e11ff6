//! Heads-up display: date and speed, legend, proximity alerts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::ephemeris::BodyId;
use crate::render::body_color;
use crate::simulation::SimulationState;

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
}

/// Human-readable simulation speed.
pub fn speed_label(days_per_second: f64) -> String {
    format!("{days_per_second:.1} days/s")
}

/// Proximity threshold shown under the legend.
pub fn threshold_label(threshold_km: f64) -> String {
    format!("Alert below {:.2} million km", threshold_km / 1.0e6)
}

/// Legend rows in draw order: icon and body.
pub fn legend_entries() -> Vec<(&'static str, BodyId)> {
    BodyId::ALL
        .iter()
        .map(|&id| {
            let icon = match id {
                BodyId::Sun => icons::SUN,
                _ if id.is_asteroid() => icons::ASTEROID,
                _ => icons::PLANET,
            };
            (icon, id)
        })
        .collect()
}

fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .corner_radius(6)
        .inner_margin(egui::Margin::same(8))
}

/// Date, speed and play/pause controls in the top-left corner.
pub fn status_panel(mut contexts: EguiContexts, mut state: ResMut<SimulationState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("status_panel"))
        .movable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} Current Date: {}",
                        icons::CALENDAR,
                        state.current_date()
                    ))
                    .monospace()
                    .color(colors::TEXT),
                );

                ui.horizontal(|ui| {
                    let paused = state.clock.paused;
                    let (icon, color, hint) = if paused {
                        (icons::PLAY, colors::PLAY_ICON, "Resume (Space)")
                    } else {
                        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
                    };
                    if ui
                        .button(egui::RichText::new(icon).color(color))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        state.clock.toggle_pause();
                    }

                    if ui.button(icons::SLOWER).on_hover_text("Slower (-)").clicked() {
                        state.clock.slow_down();
                    }
                    if ui.button(icons::FASTER).on_hover_text("Faster (+)").clicked() {
                        state.clock.speed_up();
                    }

                    ui.label(
                        egui::RichText::new(speed_label(state.clock.days_per_second()))
                            .color(colors::TEXT),
                    );
                });
            });
        });
}

/// Body legend and alert threshold in the top-right corner.
pub fn legend_panel(mut contexts: EguiContexts, state: Res<SimulationState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("legend_panel"))
        .movable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                for (icon, id) in legend_entries() {
                    ui.label(
                        egui::RichText::new(format!("{icon} {}", id.name()))
                            .color(to_color32(body_color(id))),
                    );
                }

                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        icons::WARNING,
                        threshold_label(state.alerts.threshold_km())
                    ))
                    .small()
                    .color(colors::TEXT),
                );
            });
        });
}

/// Active proximity alerts in the bottom-left corner.
pub fn alert_panel(mut contexts: EguiContexts, state: Res<SimulationState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if state.alerts.active().next().is_none() {
        return;
    }

    egui::Area::new(egui::Id::new("alert_panel"))
        .movable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                for (id, text) in state.alerts.active() {
                    ui.label(
                        egui::RichText::new(format!("{} {text}", icons::WARNING))
                            .color(to_color32(body_color(id))),
                    );
                }
            });
        });
}
