//! Main application structure and state management
//!
//! This module contains the `ChromacordApp` struct that implements the
//! `eframe::App` trait. It owns the styled document, the plain-text
//! mirror the editor surface edits, and all transient UI feedback state,
//! and it drives clipboard writes through a background task.
//!
//! ## Architecture
//!
//! The app runs in a single-threaded event loop managed by `egui`. The
//! only asynchronous boundary is the clipboard write: the UI sends an
//! [`AsyncRequest`] over a channel to a background tokio task and keeps
//! rendering; the task reports back with an [`AsyncResult`] polled each
//! frame. The write is fire-and-forget (no retries, no cancellation) and
//! its outcome only feeds the transient "Copied!" feedback.

use eframe::egui;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use chromacord::clipboard::{ClipboardSink, SystemClipboard};
use chromacord::config::Config;
use chromacord::document::Document;
use chromacord::export;
use chromacord::palette::StyleKind;
use chromacord::ui::{colors, EditorView, PaletteBar, StyledPreview};

/// Escalating feedback for repeated copies
const COPY_MESSAGES: [&str; 5] = [
    "Copied!",
    "Double Copy!",
    "Triple Copy!",
    "Dominating!!",
    "Rampage!!",
];

/// Async operation request sent from UI to background task
#[derive(Debug, Clone)]
pub(crate) enum AsyncRequest {
    /// Place the exported text on the system clipboard
    CopyToClipboard(String),
}

/// Async operation result sent from background task to UI
#[derive(Debug, Clone)]
pub(crate) enum AsyncResult {
    /// Clipboard write succeeded
    CopyCompleted,
    /// Clipboard write failed
    CopyFailed(String),
}

/// Main Chromacord application
pub struct ChromacordApp {
    /// Runtime configuration
    config: Config,
    /// The styled document, source of truth for export
    document: Document,
    /// Plain-text mirror edited by the editor surface
    text: String,
    /// UI components
    editor: EditorView,
    palette_bar: PaletteBar,
    preview: StyledPreview,
    /// How many times the user has copied since the last failure
    copy_count: usize,
    /// Transient feedback message shown next to the copy button
    feedback: Option<String>,
    /// Channel to the background clipboard task
    request_tx: mpsc::UnboundedSender<AsyncRequest>,
    /// Results coming back from the background task
    result_rx: mpsc::UnboundedReceiver<AsyncResult>,
}

impl ChromacordApp {
    /// Create the app from configuration, optionally overriding the seed
    pub fn with_config(config: Config, seed_override: Option<String>) -> Self {
        let seed = seed_override.unwrap_or_else(|| config.editor.seed_text.clone());
        let document = Document::new(seed.clone());
        let font_size = config.ui.font_size as f32;

        let (request_tx, result_rx) = spawn_clipboard_task(Arc::new(SystemClipboard::new()));

        info!("🏗️  Application created ({} chars seeded)", seed.chars().count());

        Self {
            config,
            document,
            text: seed,
            editor: EditorView::with_font_size(font_size),
            palette_bar: PaletteBar::new(),
            preview: StyledPreview::with_font_size(font_size),
            copy_count: 0,
            feedback: None,
            request_tx,
            result_rx,
        }
    }

    /// Drain results from the background clipboard task
    fn poll_async_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                AsyncResult::CopyCompleted => {
                    let message = COPY_MESSAGES[self.copy_count.min(COPY_MESSAGES.len() - 1)];
                    self.feedback = Some(message.to_string());
                    self.copy_count += 1;
                    debug!(count = self.copy_count, "clipboard write confirmed");
                }
                AsyncResult::CopyFailed(reason) => {
                    warn!("clipboard write failed: {}", reason);
                    self.copy_count = 0;
                    self.feedback = Some("Copy failed".to_string());
                }
            }
        }
    }

    /// Kick off a fire-and-forget clipboard write of the exported document
    fn copy_to_clipboard(&mut self) {
        let formatted = export::export(&self.document);
        if self.request_tx.send(AsyncRequest::CopyToClipboard(formatted)).is_err() {
            // Background task is gone; nothing to retry against.
            error!("clipboard task unavailable");
            self.feedback = Some("Copy failed".to_string());
        }
    }

    /// Render the whole window
    fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Chromacord");
                ui.label("Create colored Discord messages with ANSI code blocks");
            });
            ui.add_space(8.0);

            if let Some(command) = self.palette_bar.show(ui) {
                self.apply_command(command);
            }

            ui.add_space(8.0);
            let response = self.editor.show(ui, &mut self.text);
            if response.text_changed {
                self.truncate_to_budget();
                self.document.reseed(self.text.clone());
            }

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Preview").strong());
            self.preview.show(ui, &self.document);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let button = egui::Button::new("Copy text as Discord formatted").fill(
                    if self.copy_count > 3 {
                        egui::Color32::from_rgb(220, 50, 47)
                    } else {
                        egui::Color32::from_rgb(38, 139, 210)
                    },
                );
                if ui.add(button).clicked() {
                    self.copy_to_clipboard();
                }
                if let Some(feedback) = &self.feedback {
                    ui.label(
                        egui::RichText::new(feedback).color(colors::code_block_text()),
                    );
                }
            });
        });
    }

    /// Apply a palette command from the swatch bar
    fn apply_command(&mut self, command: &'static chromacord::StyleCommand) {
        if command.kind == StyleKind::ResetAll {
            self.document.reset();
            self.text = self.document.plain_text();
            self.editor.collapse_selection();
            return;
        }

        let Some(selection) = self.editor.selection() else {
            debug!("style {} clicked without a selection", command.code);
            return;
        };

        self.document.apply_style(selection, command);
        // The applier never auto-extends: the next style needs an explicit
        // new highlight.
        self.editor.collapse_selection();
    }

    /// Keep the editor text within the configured character budget
    fn truncate_to_budget(&mut self) {
        let budget = self.config.editor.max_text_chars;
        if self.text.chars().count() > budget {
            self.text = self.text.chars().take(budget).collect();
        }
    }
}

impl eframe::App for ChromacordApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        self.poll_async_results();
        self.render(&ctx);
    }
}

/// Spawn the background clipboard task on its own tokio runtime
///
/// Returns the request sender and result receiver the UI thread uses. The
/// task (and its runtime) shuts down when the sender is dropped.
fn spawn_clipboard_task(
    sink: Arc<dyn ClipboardSink>,
) -> (
    mpsc::UnboundedSender<AsyncRequest>,
    mpsc::UnboundedReceiver<AsyncResult>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<AsyncRequest>();
    let (result_tx, result_rx) = mpsc::unbounded_channel::<AsyncResult>();

    let spawned = std::thread::Builder::new()
        .name("clipboard".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("failed to build clipboard runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(request) = request_rx.recv().await {
                    match request {
                        AsyncRequest::CopyToClipboard(text) => {
                            let result = match sink.write_text(text).await {
                                Ok(()) => AsyncResult::CopyCompleted,
                                Err(e) => AsyncResult::CopyFailed(e.to_string()),
                            };
                            if result_tx.send(result).is_err() {
                                // UI is gone; stop the task.
                                break;
                            }
                        }
                    }
                }
            });
        });

    if let Err(e) = spawned {
        // Without the thread the channels close and copies report failure.
        error!("failed to spawn clipboard thread: {}", e);
    }

    (request_tx, result_rx)
}
