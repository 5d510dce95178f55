//! Palette swatch bar
//!
//! Renders the fixed style table as clickable controls: a row of format
//! buttons (Reset All, Bold, Underline) and one swatch row each for the
//! foreground and background colors. Clicking a control reports the
//! palette command; applying it to the document is the caller's job.

use crate::palette::{self, RenderEffect, StyleCommand};
use crate::ui::colors::{contrast_text, ToEguiColor};
use eframe::egui;

/// The swatch bar component
pub struct PaletteBar {
    /// Side length of one color swatch
    swatch_size: f32,
}

impl PaletteBar {
    /// Create a swatch bar with default sizing
    pub fn new() -> Self {
        Self { swatch_size: 26.0 }
    }

    /// Create with a custom swatch size
    pub fn with_swatch_size(swatch_size: f32) -> Self {
        Self { swatch_size }
    }

    /// Render the bar; returns the command the user clicked, if any
    pub fn show(&self, ui: &mut egui::Ui) -> Option<&'static StyleCommand> {
        let mut clicked = None;

        ui.horizontal(|ui| {
            for command in palette::formats() {
                let button = egui::Button::new(command.label);
                if ui.add(button).on_hover_text(command.label).clicked() {
                    clicked = Some(command);
                }
            }
        });

        ui.label(egui::RichText::new("FG").strong());
        ui.horizontal(|ui| {
            if let Some(command) = self.swatch_row(ui, palette::foregrounds()) {
                clicked = Some(command);
            }
        });

        ui.label(egui::RichText::new("BG").strong());
        ui.horizontal(|ui| {
            if let Some(command) = self.swatch_row(ui, palette::backgrounds()) {
                clicked = Some(command);
            }
        });

        clicked
    }

    /// One row of color swatches
    fn swatch_row(
        &self,
        ui: &mut egui::Ui,
        commands: impl Iterator<Item = &'static StyleCommand>,
    ) -> Option<&'static StyleCommand> {
        let mut clicked = None;

        for command in commands {
            let rgb = match command.effect {
                RenderEffect::Foreground(rgb) | RenderEffect::Background(rgb) => rgb,
                // Format commands never appear in a swatch row.
                _ => continue,
            };

            let size = egui::vec2(self.swatch_size, self.swatch_size);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            if ui.is_rect_visible(rect) {
                let rounding = 3u8;
                ui.painter().rect_filled(rect, rounding, rgb.to_egui());
                if response.hovered() {
                    ui.painter().rect_stroke(
                        rect,
                        rounding,
                        egui::Stroke::new(1.5, contrast_text(rgb)),
                        egui::StrokeKind::Inside,
                    );
                }
            }

            let response =
                response.on_hover_text(format!("{} ({})", command.label, command.code));
            if response.clicked() {
                clicked = Some(command);
            }
        }

        clicked
    }
}

impl Default for PaletteBar {
    fn default() -> Self {
        Self::new()
    }
}
