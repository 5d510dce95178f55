//! Styled document tree nodes
//!
//! The editor document is an owned recursive tree: text leaves, line
//! breaks, and styled spans. Nothing here depends on a live rendering
//! surface; the UI adapts this tree to egui and the serializer walks it
//! read-only.

use crate::palette::{self, RenderEffect, Rgb, StyleCommand};

/// A node in the styled document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A raw text leaf
    Text(String),
    /// A hard line break, serialized as `\n`
    LineBreak,
    /// A styled span wrapping child nodes
    Span(SpanNode),
}

/// A styled span and its ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanNode {
    pub styles: SpanStyles,
    pub children: Vec<Node>,
}

/// The visual properties set on a single span
///
/// At most one effect per category can be active on one node; a second
/// style applied to the same region nests a new span instead of merging
/// into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyles {
    pub bold: bool,
    pub underline: bool,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl SpanStyles {
    /// Styles carrying exactly the effect of one palette command
    ///
    /// `ResetAll` produces empty styles; callers are expected to handle the
    /// reset before constructing a span.
    pub fn from_command(command: &StyleCommand) -> Self {
        let mut styles = Self::default();
        match command.effect {
            RenderEffect::Bold => styles.bold = true,
            RenderEffect::Underline => styles.underline = true,
            RenderEffect::Foreground(rgb) => styles.foreground = Some(rgb),
            RenderEffect::Background(rgb) => styles.background = Some(rgb),
            RenderEffect::Reset => {}
        }
        styles
    }

    /// Whether no effect is set at all
    pub fn is_empty(&self) -> bool {
        !self.bold && !self.underline && self.foreground.is_none() && self.background.is_none()
    }

    /// Recover the SGR codes for the active effects, in the fixed emission
    /// order: bold, underline, foreground, background
    ///
    /// Each category goes through the inverse palette lookup; an effect
    /// outside the fixed palette contributes no code.
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(4);
        if self.bold {
            if let Some(cmd) = palette::lookup_by_effect(&RenderEffect::Bold) {
                codes.push(cmd.code);
            }
        }
        if self.underline {
            if let Some(cmd) = palette::lookup_by_effect(&RenderEffect::Underline) {
                codes.push(cmd.code);
            }
        }
        if let Some(rgb) = self.foreground {
            if let Some(cmd) = palette::lookup_by_effect(&RenderEffect::Foreground(rgb)) {
                codes.push(cmd.code);
            }
        }
        if let Some(rgb) = self.background {
            if let Some(cmd) = palette::lookup_by_effect(&RenderEffect::Background(rgb)) {
                codes.push(cmd.code);
            }
        }
        codes
    }
}

impl Node {
    /// Build a span node
    pub fn span(styles: SpanStyles, children: Vec<Node>) -> Self {
        Node::Span(SpanNode { styles, children })
    }

    /// Build a text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Length of this node in characters of plain text
    pub fn char_len(&self) -> usize {
        match self {
            Node::Text(text) => text.chars().count(),
            Node::LineBreak => 1,
            Node::Span(span) => span.children.iter().map(Node::char_len).sum(),
        }
    }

    /// Split this node at a character offset strictly inside it
    ///
    /// Returns the two halves; either side may be `None` when the split
    /// produces an empty piece. Span styles are carried into both halves so
    /// the rendered output is unchanged.
    pub(crate) fn split_at(self, at: usize) -> (Option<Node>, Option<Node>) {
        match self {
            Node::Text(text) => {
                let byte_at = text
                    .char_indices()
                    .nth(at)
                    .map(|(idx, _)| idx)
                    .unwrap_or(text.len());
                let (head, tail) = text.split_at(byte_at);
                (non_empty_text(head), non_empty_text(tail))
            }
            // A line break is a single character and cannot be split; the
            // offset math in split_nodes never asks for it.
            Node::LineBreak => (Some(Node::LineBreak), None),
            Node::Span(span) => {
                let styles = span.styles;
                let (left, right) = split_nodes(span.children, at);
                let wrap = |children: Vec<Node>| {
                    if children.is_empty() {
                        None
                    } else {
                        Some(Node::span(styles, children))
                    }
                };
                (wrap(left), wrap(right))
            }
        }
    }
}

fn non_empty_text(text: &str) -> Option<Node> {
    if text.is_empty() {
        None
    } else {
        Some(Node::Text(text.to_string()))
    }
}

/// Split a node list at a character offset
///
/// Nodes lying entirely before the offset go left, the rest right; a node
/// straddling the offset is split, cloning span styles into both halves.
/// This is the tree-edit primitive behind range wrapping.
pub(crate) fn split_nodes(nodes: Vec<Node>, at: usize) -> (Vec<Node>, Vec<Node>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut remaining = at;
    let mut iter = nodes.into_iter();

    while let Some(node) = iter.next() {
        if remaining == 0 {
            right.push(node);
            right.extend(iter);
            break;
        }
        let len = node.char_len();
        if len <= remaining {
            remaining -= len;
            left.push(node);
        } else {
            let (head, tail) = node.split_at(remaining);
            left.extend(head);
            right.extend(tail);
            remaining = 0;
        }
    }

    (left, right)
}
