//! Styled document model
//!
//! This module owns the editable document: a tree of text leaves, line
//! breaks, and styled spans, seeded from a plain string. Style application
//! is a pure tree edit (wrap a character range in a new span); the document
//! is read, never mutated, during serialization.

pub mod node;
pub mod selection;

pub use node::{Node, SpanNode, SpanStyles};
pub use selection::Selection;

use crate::palette::{StyleCommand, StyleKind};
use node::split_nodes;

/// The editable styled document
///
/// Created once from a plain-text seed, mutated incrementally by style
/// application, and fully restored to the seed by the reset command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The original plain-text content, kept for full reset
    seed: String,
    /// Top-level nodes in document order
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document from a plain-text seed
    ///
    /// Newlines in the seed become explicit line-break nodes so the
    /// serializer can reproduce them without inspecting text leaves.
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let nodes = nodes_from_text(&seed);
        Self { seed, nodes }
    }

    /// The seed the document was created from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Read access for the serializer and the preview renderer
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Flatten the tree back to plain text, styling discarded
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.seed.len());
        collect_plain_text(&self.nodes, &mut out);
        out
    }

    /// Total length in characters of plain text
    pub fn char_len(&self) -> usize {
        self.nodes.iter().map(Node::char_len).sum()
    }

    /// Whether any styled span exists in the tree
    ///
    /// Spans only enter the tree at the top level or inside another span,
    /// so checking the top level is sufficient.
    pub fn is_styled(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Span(_)))
    }

    /// Discard all styling and restore the original seed text
    pub fn reset(&mut self) {
        debug!("resetting document to seed ({} chars)", self.seed.chars().count());
        self.nodes = nodes_from_text(&self.seed);
    }

    /// Replace the seed and rebuild, discarding all styling
    ///
    /// Used when the user edits the raw text: the editor surface owns plain
    /// text only, so prior styling cannot survive the edit.
    pub fn reseed(&mut self, text: impl Into<String>) {
        self.seed = text.into();
        self.nodes = nodes_from_text(&self.seed);
    }

    /// Apply a palette command to the selected range
    ///
    /// `ResetAll` restores the seed regardless of the selection (the reset
    /// button is not tied to a highlight). Any other command wraps exactly
    /// the selected range in a new span carrying the command's effect; an
    /// empty or out-of-range selection leaves the document untouched.
    ///
    /// A range that partially overlaps an existing span splits that span at
    /// the boundary, so a second style over a styled region nests rather
    /// than merges.
    pub fn apply_style(&mut self, selection: Selection, command: &StyleCommand) {
        if command.kind == StyleKind::ResetAll {
            self.reset();
            return;
        }

        let Some((start, end)) = selection.resolve(self.char_len()) else {
            trace!("empty selection, style {} ignored", command.code);
            return;
        };

        debug!(code = command.code, start, end, "wrapping selection in styled span");

        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = wrap_range(nodes, start, end, SpanStyles::from_command(command));
    }
}

/// Wrap the character range `[start, end)` of `nodes` in a new styled span
///
/// When a single existing span fully contains the range the wrap recurses
/// into its children, so a style applied inside a styled region nests
/// within it. A range that straddles node boundaries splits the straddled
/// nodes instead, cloning span styles into both halves.
fn wrap_range(mut nodes: Vec<Node>, start: usize, end: usize, styles: SpanStyles) -> Vec<Node> {
    // Locate a span child that fully contains the range.
    let mut container = None;
    let mut offset = 0;
    for (idx, node) in nodes.iter().enumerate() {
        let len = node.char_len();
        if start >= offset && end <= offset + len {
            if matches!(node, Node::Span(_)) {
                container = Some((idx, offset));
            }
            // Otherwise the range sits in a leaf; wrap at this level.
            break;
        }
        offset += len;
        if offset > start {
            // The range straddles this node's boundary.
            break;
        }
    }

    if let Some((idx, offset)) = container {
        if let Node::Span(span) = &mut nodes[idx] {
            let children = std::mem::take(&mut span.children);
            span.children = wrap_range(children, start - offset, end - offset, styles);
        }
        return nodes;
    }

    let (mut rebuilt, rest) = split_nodes(nodes, start);
    let (selected, right) = split_nodes(rest, end - start);
    rebuilt.push(Node::span(styles, selected));
    rebuilt.extend(right);
    rebuilt
}

impl Document {
    /// Assemble a document from raw parts
    ///
    /// Crate-internal: lets the serializer tests build trees the public
    /// API would only produce through a sequence of applications.
    pub(crate) fn from_parts(seed: String, nodes: Vec<Node>) -> Self {
        Self { seed, nodes }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

/// Turn plain text into top-level nodes, one text leaf per line
fn nodes_from_text(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut first = true;
    for line in text.split('\n') {
        if !first {
            nodes.push(Node::LineBreak);
        }
        first = false;
        if !line.is_empty() {
            nodes.push(Node::Text(line.to_string()));
        }
    }
    nodes
}

fn collect_plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            Node::Span(span) => collect_plain_text(&span.children, out),
        }
    }
}
