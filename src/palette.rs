//! The fixed Discord style palette
//!
//! Discord renders fenced ```ansi code blocks with a fixed 16-color SGR
//! palette plus bold and underline. This module is the single source of
//! truth for that table: every style the editor can apply, keyed both by
//! SGR code and by the visual effect the code produces.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A 24-bit color as rendered by Discord's code block theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Category of a style command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Discards all styling and restores the plain seed text
    ResetAll,
    /// Bold font weight
    Bold,
    /// Underline decoration
    Underline,
    /// One of the eight foreground colors
    Foreground,
    /// One of the eight background colors
    Background,
}

/// The visual property a style command sets
///
/// Each palette entry maps to exactly one render effect and back; the
/// serializer relies on the inverse direction to recover SGR codes from a
/// styled node's computed properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderEffect {
    Reset,
    Bold,
    Underline,
    Foreground(Rgb),
    Background(Rgb),
}

/// A single entry in the fixed style table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleCommand {
    /// SGR parameter, also used as the stable identifier of the command
    pub code: u8,
    /// Human label shown in tooltips
    pub label: &'static str,
    /// Category of the command
    pub kind: StyleKind,
    /// The visual property the command sets
    pub effect: RenderEffect,
}

impl StyleCommand {
    /// Whether this command sets a foreground or background color
    pub fn is_color(&self) -> bool {
        matches!(self.kind, StyleKind::Foreground | StyleKind::Background)
    }

    /// Whether this command sets a text format (bold, underline)
    pub fn is_format(&self) -> bool {
        matches!(self.kind, StyleKind::Bold | StyleKind::Underline)
    }
}

/// The full fixed palette: 3 format commands, 8 foregrounds, 8 backgrounds
pub const PALETTE: [StyleCommand; 19] = [
    StyleCommand { code: 0, label: "Reset All", kind: StyleKind::ResetAll, effect: RenderEffect::Reset },
    StyleCommand { code: 1, label: "Bold", kind: StyleKind::Bold, effect: RenderEffect::Bold },
    StyleCommand { code: 4, label: "Underline", kind: StyleKind::Underline, effect: RenderEffect::Underline },
    // Foreground colors
    StyleCommand { code: 30, label: "Gray", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(79, 84, 92)) },
    StyleCommand { code: 31, label: "Red", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(220, 50, 47)) },
    StyleCommand { code: 32, label: "Green", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(133, 153, 0)) },
    StyleCommand { code: 33, label: "Yellow", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(181, 137, 0)) },
    StyleCommand { code: 34, label: "Blue", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(38, 139, 210)) },
    StyleCommand { code: 35, label: "Pink", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(211, 54, 130)) },
    StyleCommand { code: 36, label: "Cyan", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(42, 161, 152)) },
    StyleCommand { code: 37, label: "White", kind: StyleKind::Foreground, effect: RenderEffect::Foreground(Rgb::new(255, 255, 255)) },
    // Background colors
    StyleCommand { code: 40, label: "Dark Blue", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(0, 43, 54)) },
    StyleCommand { code: 41, label: "Orange", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(203, 75, 22)) },
    StyleCommand { code: 42, label: "Marble Blue", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(88, 110, 117)) },
    StyleCommand { code: 43, label: "Greyish Turquoise", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(101, 123, 131)) },
    StyleCommand { code: 44, label: "Gray", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(131, 148, 150)) },
    StyleCommand { code: 45, label: "Indigo", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(108, 113, 196)) },
    StyleCommand { code: 46, label: "Light Gray", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(147, 161, 161)) },
    StyleCommand { code: 47, label: "White", kind: StyleKind::Background, effect: RenderEffect::Background(Rgb::new(253, 246, 227)) },
];

static BY_CODE: Lazy<HashMap<u8, &'static StyleCommand>> =
    Lazy::new(|| PALETTE.iter().map(|cmd| (cmd.code, cmd)).collect());

static BY_EFFECT: Lazy<HashMap<RenderEffect, &'static StyleCommand>> =
    Lazy::new(|| PALETTE.iter().map(|cmd| (cmd.effect, cmd)).collect());

/// Look up a style command by its SGR code
pub fn lookup_by_code(code: u8) -> Option<&'static StyleCommand> {
    BY_CODE.get(&code).copied()
}

/// Look up a style command by the render effect it produces
///
/// Inverse of [`lookup_by_code`]: used during serialization to recover the
/// SGR code from a node's computed style. Returns `None` for effects
/// outside the fixed palette.
pub fn lookup_by_effect(effect: &RenderEffect) -> Option<&'static StyleCommand> {
    BY_EFFECT.get(effect).copied()
}

/// The format commands (reset, bold, underline), in display order
pub fn formats() -> impl Iterator<Item = &'static StyleCommand> {
    PALETTE
        .iter()
        .filter(|cmd| matches!(cmd.kind, StyleKind::ResetAll | StyleKind::Bold | StyleKind::Underline))
}

/// The eight foreground swatches, in code order
pub fn foregrounds() -> impl Iterator<Item = &'static StyleCommand> {
    PALETTE.iter().filter(|cmd| cmd.kind == StyleKind::Foreground)
}

/// The eight background swatches, in code order
pub fn backgrounds() -> impl Iterator<Item = &'static StyleCommand> {
    PALETTE.iter().filter(|cmd| cmd.kind == StyleKind::Background)
}
