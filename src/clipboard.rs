//! Clipboard capability
//!
//! The core treats the clipboard as an external capability: a single
//! `write_text` operation that either succeeds or fails. The app drives it
//! fire-and-forget from a background task; success only feeds transient UI
//! feedback and failure is never retried.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Write-only clipboard capability consumed by the export flow
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Place `text` on the clipboard
    async fn write_text(&self, text: String) -> Result<()>;
}

/// System clipboard backed by `arboard`
///
/// `arboard` is synchronous and may block on the windowing system, so each
/// write runs on the blocking thread pool. A fresh handle per write keeps
/// the sink free of shared mutable state.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<()> {
        let outcome = tokio::task::spawn_blocking(move || -> Result<()> {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
                reason: e.to_string(),
            })?;
            clipboard.set_text(text)?;
            Ok(())
        })
        .await;

        match outcome {
            Ok(result) => result,
            Err(join_err) => Err(Error::ClipboardWriteFailed {
                reason: join_err.to_string(),
            }),
        }
    }
}

/// In-memory sink for tests and headless runs
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard mutex poisoned").clone()
    }
}

#[async_trait]
impl ClipboardSink for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<()> {
        debug!(chars = text.chars().count(), "memory clipboard write");
        *self.contents.lock().expect("clipboard mutex poisoned") = Some(text);
        Ok(())
    }
}
