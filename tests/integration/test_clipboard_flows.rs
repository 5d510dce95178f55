//! Integration tests for the export-to-clipboard flow
//!
//! These run against the in-memory sink; the arboard-backed sink needs a
//! windowing system and is exercised manually.

use async_trait::async_trait;
use chromacord::clipboard::{ClipboardSink, MemoryClipboard};
use chromacord::document::{Document, Selection};
use chromacord::error::{Error, Result};
use chromacord::export;
use chromacord::palette::lookup_by_code;

struct FailingClipboard;

#[async_trait]
impl ClipboardSink for FailingClipboard {
    async fn write_text(&self, _text: String) -> Result<()> {
        Err(Error::ClipboardWriteFailed {
            reason: "simulated failure".to_string(),
        })
    }
}

#[tokio::test]
async fn test_exported_document_reaches_clipboard() {
    let mut doc = Document::new("ship it");
    doc.apply_style(Selection::new(0, 4), lookup_by_code(32).unwrap());

    let sink = MemoryClipboard::new();
    sink.write_text(export::export(&doc)).await.unwrap();

    assert_eq!(
        sink.contents().as_deref(),
        Some("```ansi\n\x1b[32mship\x1b[0m it\n```")
    );
}

#[tokio::test]
async fn test_repeated_copies_keep_last_payload() {
    let sink = MemoryClipboard::new();

    let mut doc = Document::new("first");
    sink.write_text(export::export(&doc)).await.unwrap();

    doc.reseed("second");
    sink.write_text(export::export(&doc)).await.unwrap();

    assert_eq!(sink.contents().as_deref(), Some("```ansi\nsecond\n```"));
}

#[tokio::test]
async fn test_write_failure_surfaces_as_error() {
    let sink = FailingClipboard;
    let err = sink.write_text("anything".to_string()).await.unwrap_err();
    assert!(matches!(err, Error::ClipboardWriteFailed { .. }));
}

#[tokio::test]
async fn test_clipboard_payload_is_pasteable_wire_format() {
    let mut doc = Document::new("status: ok");
    doc.apply_style(Selection::new(8, 10), lookup_by_code(32).unwrap());

    let sink = MemoryClipboard::new();
    sink.write_text(export::export(&doc)).await.unwrap();

    let payload = sink.contents().unwrap();
    assert!(payload.starts_with("```ansi\n"));
    assert!(payload.ends_with("\n```"));
    // Inside the fence, codes are only drawn from the fixed palette set.
    assert!(payload.contains("\x1b[32m"));
    assert!(payload.contains("\x1b[0m"));
}
