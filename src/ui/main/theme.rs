use egui::Color32;

use crate::settings::{Settings, Theme};

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let mut visuals = match settings.theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
        Theme::Oled => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::BLACK;
            visuals.window_fill = Color32::BLACK;
            visuals.extreme_bg_color = Color32::BLACK;
            visuals
        }
    };

    // Active album selector
    visuals.selection.bg_fill = Color32::from_rgb(70, 130, 255).linear_multiply(0.6);

    ctx.set_visuals(visuals);
}
