//! Configuration management for Chromacord
//!
//! User-configurable settings (window geometry, fonts, the editor seed
//! text) with TOML persistence, validation, and graceful fallback to
//! defaults when no file is found.

pub mod loader;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Chromacord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Editor configuration
    pub editor: EditorConfig,
}

impl Config {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.ui.validate()?;
        self.editor.validate()?;
        Ok(())
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Font family for the editor and preview
    pub font_family: String,

    /// Font size in points
    pub font_size: u32,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,

    /// Whether to start maximized
    pub start_maximized: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: "JetBrains Mono".to_string(),
            font_size: 14,
            window_width: 800,
            window_height: 600,
            start_maximized: false,
        }
    }
}

impl UiConfig {
    /// Validate the UI configuration
    pub fn validate(&self) -> Result<()> {
        if self.font_size < 8 || self.font_size > 72 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("font size {} outside 8..=72", self.font_size),
            });
        }
        if self.window_width < 400 || self.window_height < 300 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window".to_string(),
                reason: format!(
                    "window {}x{} below minimum 400x300",
                    self.window_width, self.window_height
                ),
            });
        }
        Ok(())
    }
}

/// Editor-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Seed text a fresh document starts with
    pub seed_text: String,

    /// Maximum characters accepted in the editor
    pub max_text_chars: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed_text: "Welcome to Chromacord!".to_string(),
            // Discord rejects messages over 2000 characters; escape
            // sequences eat into that budget, so leave headroom.
            max_text_chars: 1900,
        }
    }
}

impl EditorConfig {
    /// Validate the editor configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_text_chars == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "editor.max_text_chars".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
