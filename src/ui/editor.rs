//! Plain-text editor surface
//!
//! egui stand-in for a contenteditable region: a multiline text box that
//! owns the plain text and reports the current character selection.
//! Styling never lives here; the styled document tree is rebuilt from this
//! text whenever it changes, and the selection feeds style application.

use crate::document::Selection;
use eframe::egui;

/// Editor surface component
pub struct EditorView {
    /// Font used for the text box
    font_size: f32,
    /// Rows the text box reserves
    desired_rows: usize,
    /// Last selection observed, kept so a swatch click that moves focus
    /// away from the text box can still apply to the highlight
    last_selection: Option<Selection>,
}

/// What happened in the editor this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorResponse {
    /// Current (or most recent) non-empty selection
    pub selection: Option<Selection>,
    /// Whether the user edited the text this frame
    pub text_changed: bool,
}

impl EditorView {
    /// Create an editor surface with default sizing
    pub fn new() -> Self {
        Self {
            font_size: 14.0,
            desired_rows: 6,
            last_selection: None,
        }
    }

    /// Create with a custom font size
    pub fn with_font_size(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::new()
        }
    }

    /// Render the text box and report selection and edits
    pub fn show(&mut self, ui: &mut egui::Ui, text: &mut String) -> EditorResponse {
        let output = egui::TextEdit::multiline(text)
            .font(egui::FontId::monospace(self.font_size))
            .desired_width(f32::INFINITY)
            .desired_rows(self.desired_rows)
            .lock_focus(true)
            .show(ui);

        let text_changed = output.response.changed();
        if text_changed {
            // The old selection points into text that no longer exists.
            self.last_selection = None;
        }

        if let Some(range) = output.state.cursor.char_range() {
            let selection = Selection::new(range.secondary.index, range.primary.index);
            if !selection.is_empty() {
                self.last_selection = Some(selection);
            }
        }

        EditorResponse {
            selection: self.last_selection,
            text_changed,
        }
    }

    /// Drop the remembered selection, e.g. after a style was applied
    ///
    /// The applier collapses the selection by contract: the next style must
    /// come from an explicit new highlight.
    pub fn collapse_selection(&mut self) {
        self.last_selection = None;
    }

    /// The most recent non-empty selection, if still valid
    pub fn selection(&self) -> Option<Selection> {
        self.last_selection
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new()
    }
}
