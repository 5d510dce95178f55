//! Chromacord - a Discord colored-text composer
//!
//! This library provides the core functionality for Chromacord, a GUI
//! editor that styles spans of text with Discord's fixed ANSI palette and
//! exports the result as a fenced ```ansi code block ready to paste into
//! chat.
//!
//! ## Features
//!
//! - **Fixed Palette:** The 19 SGR commands Discord renders (reset, bold,
//!   underline, 8 foreground and 8 background colors), mapped both ways
//!   between code and visual effect
//! - **Styled Document:** An owned tree of text, line breaks, and styled
//!   spans, edited by wrapping character ranges
//! - **ANSI Export:** Depth-first serialization into literal escape
//!   sequences, wrapped in a ```ansi fence
//! - **Clipboard:** `arboard`-backed capability behind a small async trait
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`palette`] - The fixed style table and its bidirectional lookups
//! - [`document`] - Styled document tree, selection, style application
//! - [`export`] - ANSI serialization and the fenced Discord wire format
//! - [`clipboard`] - Clipboard capability and test double
//! - [`config`] - Configuration loading and validation
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI Components
//!
//! - [`ui`] - egui components (swatch bar, editor surface, styled preview)
//!
//! ## Quick Start
//!
//! ```
//! use chromacord::document::{Document, Selection};
//! use chromacord::{export, palette};
//!
//! let mut doc = Document::new("make me red");
//! let red = palette::lookup_by_code(31).unwrap();
//! doc.apply_style(Selection::new(8, 11), red);
//!
//! assert_eq!(export::serialize(&doc), "make me \u{1b}[31mred\u{1b}[0m");
//! ```
//!
//! ## Architecture
//!
//! The core is synchronous and stateless between calls: the UI layer owns
//! the document, the selection, and all transient feedback state, and
//! passes them into pure functions. The only asynchronous boundary is the
//! clipboard write, which the application drives fire-and-forget from a
//! background tokio task.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod palette;
pub mod ui;

// Re-exports for core functionality
pub use config::Config;
pub use document::{Document, Selection};
pub use error::{Error, Result};
pub use palette::{RenderEffect, StyleCommand, StyleKind};

// Version information
/// The current version of Chromacord from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize Chromacord with default settings
///
/// Loads configuration from the default locations, falling back to
/// defaults when no file is found or the file is unreadable.
///
/// # Errors
///
/// Returns an error only when a configuration file was found, parsed, and
/// then failed validation; a missing or unreadable file is not fatal.
pub fn init() -> Result<Config> {
    info!("🚀 Initializing {} v{}", NAME, VERSION);

    let config = match config::loader::ConfigLoader::load() {
        Ok(config) => {
            info!("✅ Configuration loaded");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    config.validate()?;
    info!("🎨 {} initialization complete", NAME);
    Ok(config)
}

/// Initialize Chromacord with a custom configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "🚀 Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = config::loader::ConfigLoader::load_from_file(config_path)?;
    info!("✅ Custom configuration loaded from: {}", config_path.display());
    Ok(config)
}

/// Get default configuration
///
/// Returns a `Config` instance with all default values. This is useful for
/// testing or when you want to inspect the default configuration values.
///
/// # Examples
///
/// ```
/// use chromacord::default_config;
///
/// let config = default_config();
/// assert_eq!(config.ui.font_size, 14);
/// ```
pub fn default_config() -> Config {
    Config::default()
}
