//! Color utilities for UI rendering
//!
//! Converts palette colors to egui colors and provides the handful of
//! fixed chrome colors the editor uses.

use crate::palette::Rgb;
use eframe::egui;

/// Extension trait to convert a palette Rgb to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;

    /// Convert to egui::Color32 with custom alpha
    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32;
}

impl ToEguiColor for Rgb {
    fn to_egui(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

/// Background of the preview pane, matching Discord's code block
pub fn code_block_background() -> egui::Color32 {
    egui::Color32::from_rgb(43, 45, 49)
}

/// Default text color inside the preview pane
pub fn code_block_text() -> egui::Color32 {
    egui::Color32::from_rgb(220, 221, 222)
}

/// Readable label color on top of a swatch
///
/// Dark swatches get white text, light swatches black, by perceived
/// luminance.
pub fn contrast_text(background: Rgb) -> egui::Color32 {
    let luminance =
        0.299 * background.r as f32 + 0.587 * background.g as f32 + 0.114 * background.b as f32;
    if luminance < 128.0 {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    }
}

/// Brighten a color, used to fake bold weight in the preview
pub fn brighten(color: egui::Color32, factor: f32) -> egui::Color32 {
    let scale = |channel: u8| ((channel as f32 * factor).min(255.0)) as u8;
    egui::Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}
