//! TUI-local state (not shared with the session).

use promptcraft::DraftField;

/// Input mode for the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Normal mode: keys navigate, scroll, and trigger builder actions.
    Normal,
    /// Editing the focused builder field. Pre-filled with the current
    /// value; each keystroke updates the draft, Enter keeps it, Esc
    /// restores the value the edit started from.
    EditField,
}

/// Side effects a key press asks the event loop to perform.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Copy this text to the clipboard (fire-and-forget).
    Copy(String),
}

/// TUI-local state (not shared with the session).
pub(crate) struct App {
    pub(crate) input_mode: InputMode,
    pub(crate) input_buffer: String,
    /// Field value when the current edit began, restored on Esc.
    pub(crate) edit_original: String,
    /// Builder field that receives edits.
    pub(crate) focused_field: DraftField,
    /// Highlighted entry in the builder's template list.
    pub(crate) template_cursor: usize,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    /// Offset from the bottom of the log (0 = follow tail).
    pub(crate) log_scroll: usize,
    /// Top line of the scrollable text views.
    pub(crate) content_scroll: usize,
    /// Status messages shown temporarily at the bottom.
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            edit_original: String::new(),
            focused_field: DraftField::Task,
            template_cursor: 0,
            show_logs: false,
            log_scroll: 0,
            content_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }
}
