//! Styled document preview
//!
//! Renders the document tree the way Discord will show it: a dark code
//! block with palette colors, bold approximated by brightening (the
//! default egui fonts carry no bold variant) and underline as a stroke
//! under the affected glyphs.

use crate::document::{Document, Node, SpanStyles};
use crate::palette::Rgb;
use crate::ui::colors::{self, ToEguiColor};
use eframe::egui;
use eframe::egui::text::{LayoutJob, TextFormat};

/// Preview pane component
pub struct StyledPreview {
    /// Font used for the preview text
    font_size: f32,
}

/// Effective style at one point of the walk, merged from all ancestors
#[derive(Debug, Clone, Copy, Default)]
struct Inherited {
    bold: bool,
    underline: bool,
    foreground: Option<Rgb>,
    background: Option<Rgb>,
}

impl Inherited {
    /// Child span styles override or extend what the ancestors set
    fn merge(self, styles: &SpanStyles) -> Self {
        Self {
            bold: self.bold || styles.bold,
            underline: self.underline || styles.underline,
            foreground: styles.foreground.or(self.foreground),
            background: styles.background.or(self.background),
        }
    }
}

impl StyledPreview {
    /// Create a preview pane with default sizing
    pub fn new() -> Self {
        Self { font_size: 14.0 }
    }

    /// Create with a custom font size
    pub fn with_font_size(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Render the document inside a code-block style frame
    pub fn show(&self, ui: &mut egui::Ui, document: &Document) {
        let job = self.layout(document);
        egui::Frame::new()
            .fill(colors::code_block_background())
            .inner_margin(egui::Margin::same(8))
            .corner_radius(4)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if document.char_len() == 0 {
                    ui.label(
                        egui::RichText::new("(empty)")
                            .color(colors::code_block_text().gamma_multiply(0.5))
                            .font(egui::FontId::monospace(self.font_size)),
                    );
                } else {
                    ui.label(job);
                }
            });
    }

    /// Build the laid-out text for a whole document
    fn layout(&self, document: &Document) -> LayoutJob {
        let mut job = LayoutJob::default();
        self.append_nodes(&mut job, document.nodes(), Inherited::default());
        job
    }

    fn append_nodes(&self, job: &mut LayoutJob, nodes: &[Node], inherited: Inherited) {
        for node in nodes {
            match node {
                Node::Text(text) => job.append(text, 0.0, self.format(inherited)),
                Node::LineBreak => job.append("\n", 0.0, self.format(inherited)),
                Node::Span(span) => {
                    self.append_nodes(job, &span.children, inherited.merge(&span.styles));
                }
            }
        }
    }

    fn format(&self, inherited: Inherited) -> TextFormat {
        let mut color = inherited
            .foreground
            .map(|rgb| rgb.to_egui())
            .unwrap_or_else(colors::code_block_text);
        if inherited.bold {
            color = colors::brighten(color, 1.2);
        }

        let background = inherited
            .background
            .map(|rgb| rgb.to_egui())
            .unwrap_or(egui::Color32::TRANSPARENT);

        let underline = if inherited.underline {
            egui::Stroke::new(1.0, color)
        } else {
            egui::Stroke::NONE
        };

        TextFormat {
            font_id: egui::FontId::monospace(self.font_size),
            color,
            background,
            underline,
            ..Default::default()
        }
    }
}

impl Default for StyledPreview {
    fn default() -> Self {
        Self::new()
    }
}
