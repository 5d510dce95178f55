//! ANSI serialization and Discord export
//!
//! Walks the styled document tree depth-first and emits literal SGR escape
//! sequences: `ESC[<codes>m` on entering a styled node, `ESC[0m` on
//! leaving it. The result, wrapped in a fenced ```ansi code block, is the
//! exact string Discord renders with colors.

use crate::document::{Document, Node};
use once_cell::sync::Lazy;
use regex::Regex;

/// The SGR escape introducer
const CSI: &str = "\x1b[";

/// Reset sequence closing every opened span
const RESET: &str = "\x1b[0m";

static SGR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static SGR regex"));

/// Serialize a document into an ANSI-escaped string
///
/// Pure and idempotent: the document is read, never mutated, and two calls
/// on the same tree produce the same string. A document with no styled
/// spans serializes to its plain text unchanged.
pub fn serialize(document: &Document) -> String {
    let mut out = String::with_capacity(document.seed().len());
    serialize_nodes(document.nodes(), &mut out);
    out
}

fn serialize_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            Node::Span(span) => {
                let codes = span.styles.sgr_codes();
                if codes.is_empty() {
                    // No recognized style on this node; recurse without
                    // emitting escapes.
                    serialize_nodes(&span.children, out);
                } else {
                    out.push_str(CSI);
                    let mut first = true;
                    for code in codes {
                        if !first {
                            out.push(';');
                        }
                        first = false;
                        out.push_str(&code.to_string());
                    }
                    out.push('m');
                    serialize_nodes(&span.children, out);
                    out.push_str(RESET);
                }
            }
        }
    }
}

/// Wrap serialized output in the fenced code block Discord expects
pub fn fenced(ansi: &str) -> String {
    format!("```ansi\n{}\n```", ansi)
}

/// Serialize and fence a document in one step
///
/// This is the string handed to the clipboard capability, ready to paste
/// into Discord chat.
pub fn export(document: &Document) -> String {
    let out = fenced(&serialize(document));
    debug!(chars = out.chars().count(), "exported document");
    out
}

/// Remove all SGR escape sequences from a string
pub fn strip_sgr(text: &str) -> String {
    SGR_REGEX.replace_all(text, "").into_owned()
}

/// Whether a string contains any SGR escape sequence
pub fn has_sgr(text: &str) -> bool {
    text.contains(CSI)
}
