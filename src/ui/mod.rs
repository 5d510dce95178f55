//! UI components and rendering
//!
//! This module contains the reusable UI pieces of Chromacord: the palette
//! swatch bar, the plain-text editor surface, and the styled preview pane.
//! The eframe application in `bin/chromacord` wires them together.

pub mod colors;
pub mod editor;
pub mod preview;
pub mod swatches;

// Re-exports for convenience
pub use colors::ToEguiColor;
pub use editor::{EditorResponse, EditorView};
pub use preview::StyledPreview;
pub use swatches::PaletteBar;
