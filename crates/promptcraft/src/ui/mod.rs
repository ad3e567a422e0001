//! Session state shared between the guide frontend and background tasks.
//!
//! This module holds the plain data model a frontend (the TUI, or a test)
//! renders from. It has no rendering dependencies.
//!
//! # Architecture
//!
//! ```text
//! key events ──transitions──▶ Arc<Mutex<GuideState>> ◀──reads── renderer
//!                                      ▲
//!                 clipboard task ──────┘ (copied_at only)
//! ```
//!
//! Every transition is synchronous and completes before the next event is
//! handled. The only writer outside the frontend thread is the detached
//! clipboard task, which touches nothing but `copied_at`.

pub mod tracing;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::assemble::{AssembledPrompt, assemble};
use crate::draft::{DraftField, PromptDraft};
use crate::guide::Page;
use crate::template::{PromptTemplate, load_template};

/// Maximum log lines kept in memory.
pub const MAX_LOG_LINES: usize = 2000;
/// Trim to this many when the cap is exceeded.
pub const LOG_TRIM_TO: usize = 1200;

/// How long the "copied" indicator stays visible after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

// ── Log Types ─────────────────────────────────────────────────────────

/// A single log line captured from tracing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogLine {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log severity level (mirrors tracing levels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short fixed-width label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

// ── GuideState ────────────────────────────────────────────────────────

/// The whole session: which view is showing, the theme, and the builder.
#[derive(Clone, Debug)]
pub struct GuideState {
    // ── Presentation ──
    pub page: Page,
    pub dark_mode: bool,

    // ── Builder ──
    pub draft: PromptDraft,
    /// Last assembly result shown in the "generated prompt" area.
    pub assembled: AssembledPrompt,
    /// Re-assemble after every field edit instead of only on generate.
    pub live_preview: bool,
    /// Name of the template most recently loaded into the draft.
    pub loaded_template: Option<String>,
    /// When the last successful clipboard copy finished.
    pub copied_at: Option<Instant>,

    // ── Tracing log capture ──
    pub logs: Vec<LogLine>,

    // ── Lifecycle ──
    /// The frontend sets this to `true` when the user requests quit.
    pub quit_requested: bool,
}

impl Default for GuideState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            dark_mode: false,
            draft: PromptDraft::default(),
            assembled: assemble(&PromptDraft::default()),
            live_preview: true,
            loaded_template: None,
            copied_at: None,
            logs: Vec::new(),
            quit_requested: false,
        }
    }
}

impl GuideState {
    /// Switch to another view.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            ::tracing::info!(from = ?self.page, to = ?page, "page change");
        }
        self.page = page;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Replace one field of the draft.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        if self.live_preview {
            self.generate();
        }
    }

    /// Assemble the current draft into `assembled`.
    pub fn generate(&mut self) {
        self.assembled = assemble(&self.draft);
    }

    /// Overwrite the draft with a template, then assemble the new draft.
    ///
    /// Assembly reads the freshly loaded draft, never the one it replaced.
    pub fn apply_template(&mut self, template: &PromptTemplate) {
        self.draft = load_template(template);
        self.loaded_template = Some(template.name.clone());
        self.generate();
    }

    /// Empty every field and re-assemble the empty draft.
    pub fn clear_draft(&mut self) {
        self.draft = PromptDraft::default();
        self.loaded_template = None;
        self.generate();
    }

    /// Whether the "copied" indicator should be visible at `now`.
    pub fn copy_indicator_active(&self, now: Instant) -> bool {
        copy_indicator_active(self.copied_at, now)
    }
}

/// True while `now` is within [`COPY_FEEDBACK`] of a successful copy.
pub fn copy_indicator_active(copied_at: Option<Instant>, now: Instant) -> bool {
    copied_at.is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK)
}

// ── Convenience Updaters ──────────────────────────────────────────────

/// Lock the shared state mutex and run a closure on the guard.
/// Silently ignores poisoned locks (no log spam inside UI frontends).
macro_rules! with_state {
    ($state:expr, |$s:ident| $body:block) => {
        if let Ok(mut $s) = $state.lock() {
            $body
        }
    };
}

pub fn navigate(state: &Arc<Mutex<GuideState>>, page: Page) {
    with_state!(state, |s| { s.navigate(page) });
}

pub fn toggle_dark_mode(state: &Arc<Mutex<GuideState>>) {
    with_state!(state, |s| { s.toggle_dark_mode() });
}

pub fn set_field(state: &Arc<Mutex<GuideState>>, field: DraftField, value: &str) {
    with_state!(state, |s| { s.set_field(field, value) });
}

pub fn generate(state: &Arc<Mutex<GuideState>>) {
    with_state!(state, |s| { s.generate() });
}

pub fn apply_template(state: &Arc<Mutex<GuideState>>, template: &PromptTemplate) {
    with_state!(state, |s| { s.apply_template(template) });
}

pub fn clear_draft(state: &Arc<Mutex<GuideState>>) {
    with_state!(state, |s| { s.clear_draft() });
}

/// Record a successful clipboard copy at `at`.
pub fn mark_copied(state: &Arc<Mutex<GuideState>>, at: Instant) {
    with_state!(state, |s| { s.copied_at = Some(at) });
}

pub fn request_quit(state: &Arc<Mutex<GuideState>>) {
    with_state!(state, |s| { s.quit_requested = true });
}

/// Clone the state for rendering so the lock is not held while drawing.
pub fn snapshot(state: &Arc<Mutex<GuideState>>) -> GuideState {
    state
        .lock()
        .map(|s| s.clone())
        .unwrap_or_else(|e| e.into_inner().clone())
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::builtin_templates;

    #[test]
    fn log_level_labels() {
        assert_eq!(LogLevel::Info.label(), "INFO ");
        assert_eq!(LogLevel::Error.label(), "ERROR");
        assert_eq!(LogLevel::Warn.label(), "WARN ");
    }

    #[test]
    fn guide_state_defaults() {
        let state = GuideState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.dark_mode);
        assert!(state.live_preview);
        assert!(state.draft.is_empty());
        assert!(state.assembled.prompt.is_empty());
        assert!(state.copied_at.is_none());
        assert!(!state.quit_requested);
    }

    #[test]
    fn live_preview_reassembles_on_edit() {
        let mut state = GuideState::default();
        state.set_field(DraftField::Task, "Summarize");
        state.set_field(DraftField::Format, "one line");
        assert_eq!(state.assembled.prompt, "Summarize Format: one line");
    }

    #[test]
    fn without_live_preview_edits_wait_for_generate() {
        let mut state = GuideState {
            live_preview: false,
            ..Default::default()
        };
        state.set_field(DraftField::Task, "Summarize");
        assert_eq!(state.assembled.prompt, "");
        state.generate();
        assert_eq!(state.assembled.prompt, "Summarize");
    }

    #[test]
    fn apply_template_assembles_fresh_draft() {
        let mut state = GuideState {
            live_preview: false,
            ..Default::default()
        };
        state.set_field(DraftField::Task, "stale task");
        state.generate();

        let template = &builtin_templates()[1];
        state.apply_template(template);
        assert_eq!(state.draft, template.draft);
        assert!(!state.assembled.prompt.contains("stale"));
        assert!(state.assembled.prompt.starts_with("Write a short story"));
        assert_eq!(state.loaded_template.as_deref(), Some("Creative Writing"));
    }

    #[test]
    fn clear_draft_resets_builder() {
        let mut state = GuideState::default();
        state.apply_template(&builtin_templates()[0]);
        state.clear_draft();
        assert!(state.draft.is_empty());
        assert!(state.assembled.prompt.is_empty());
        assert!(state.loaded_template.is_none());
        assert_eq!(state.assembled, assemble(&state.draft));
        assert_eq!(state.assembled.word_count, 1);
    }

    #[test]
    fn default_state_holds_assembled_empty_draft() {
        let state = GuideState::default();
        assert_eq!(state.assembled, assemble(&state.draft));
        assert_eq!(state.assembled.word_count, 1);
    }

    #[test]
    fn copy_indicator_window() {
        let start = Instant::now();
        assert!(!copy_indicator_active(None, start));
        assert!(copy_indicator_active(Some(start), start));
        assert!(copy_indicator_active(
            Some(start),
            start + Duration::from_millis(1999)
        ));
        assert!(!copy_indicator_active(Some(start), start + COPY_FEEDBACK));
        assert!(!copy_indicator_active(
            Some(start),
            start + Duration::from_secs(5)
        ));
    }

    #[test]
    fn shared_updaters_work() {
        let state = Arc::new(Mutex::new(GuideState::default()));

        navigate(&state, Page::Builder);
        toggle_dark_mode(&state);
        set_field(&state, DraftField::Context, "B");
        set_field(&state, DraftField::Format, "F");
        {
            let s = state.lock().unwrap();
            assert_eq!(s.page, Page::Builder);
            assert!(s.dark_mode);
            assert_eq!(s.assembled.prompt, "B Format: F");
        }

        let now = Instant::now();
        mark_copied(&state, now);
        assert!(snapshot(&state).copy_indicator_active(now));

        request_quit(&state);
        assert!(state.lock().unwrap().quit_requested);
    }
}
