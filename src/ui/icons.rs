//! Phosphor icon definitions for the HUD.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

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

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
pub const FASTER: &str = egui_phosphor::regular::FAST_FORWARD;
pub const SLOWER: &str = egui_phosphor::regular::REWIND;
pub const CALENDAR: &str = egui_phosphor::regular::CALENDAR_BLANK;
/// Proximity warning
pub const WARNING: &str = egui_phosphor::regular::WARNING;
pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;
