//! Terminal UI for the promptcraft prompt-engineering guide.
//!
//! Renders a shared [`GuideState`] (ratatui + crossterm) as the guide's
//! four views and turns key presses into state transitions. Clipboard
//! copies run as detached tasks on the tokio runtime passed in
//! [`TuiConfig::runtime`].
//!
//! # Quick start
//!
//! ```ignore
//! use promptcraft::ui::GuideState;
//! use promptcraft_tui::{TuiConfig, spawn_tui};
//! use std::sync::{Arc, Mutex};
//!
//! let state = Arc::new(Mutex::new(GuideState::default()));
//! let handle = spawn_tui(state.clone(), TuiConfig::default());
//! handle.join().unwrap()?;
//! ```

use std::io;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use promptcraft::clipboard::{Clipboard, NoClipboard, copy_detached};
use promptcraft::template::TemplateLibrary;
use promptcraft::ui::tracing::LogBuffer;
use promptcraft::ui::{self, GuideState};
use ratatui::prelude::*;

mod app;
mod input;
mod render;
pub mod theme;

pub use render::log_level_style;
pub use theme::Theme;

use app::{Action, App};
use input::handle_key_event;
use render::render;

/// Configuration for the TUI.
pub struct TuiConfig {
    /// Where copied prompts go.
    pub clipboard: Arc<dyn Clipboard>,
    /// Runtime that clipboard writes are spawned on. Without one, copy
    /// requests are logged and dropped.
    pub runtime: Option<tokio::runtime::Handle>,
    /// Templates offered in the builder.
    pub templates: TemplateLibrary,
    /// Optional log buffer from the tracing layer, drained once per frame
    /// into `GuideState::logs`.
    pub log_buffer: Option<LogBuffer>,
    /// Open with the log pane visible.
    pub show_logs: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            clipboard: Arc::new(NoClipboard),
            runtime: None,
            templates: TemplateLibrary::new(),
            log_buffer: None,
            show_logs: false,
        }
    }
}

/// Spawn the TUI on a dedicated OS thread. The thread yields the
/// result of [`run_tui`].
pub fn spawn_tui(
    state: Arc<Mutex<GuideState>>,
    config: TuiConfig,
) -> JoinHandle<io::Result<()>> {
    std::thread::spawn(move || run_tui(state, &config))
}

/// Run the TUI event loop (blocking). Returns when the user quits or
/// `quit_requested` is set on the state.
pub fn run_tui(state: Arc<Mutex<GuideState>>, config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &state, config);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &Arc<Mutex<GuideState>>,
    config: &TuiConfig,
) -> io::Result<()> {
    let mut app = App::new();
    app.show_logs = config.show_logs;

    loop {
        let quit = state.lock().map(|s| s.quit_requested).unwrap_or(true);
        if app.should_quit || quit {
            ui::request_quit(state);
            return Ok(());
        }

        if let Some(ref log_buf) = config.log_buffer {
            log_buf.flush_into(state);
        }

        // Render from a snapshot so the lock is not held while drawing.
        let snap = ui::snapshot(state);
        terminal.draw(|frame| render(frame, &snap, &app, &config.templates))?;

        // Poll for input events (100ms timeout keeps the copy indicator
        // expiring on time).
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = handle_key_event(key, &mut app, state, &config.templates)
        {
            // Detached: the copy outcome lands in `copied_at` on its own.
            drop(perform(action, state, config));
        }
    }
}

fn perform(
    action: Action,
    state: &Arc<Mutex<GuideState>>,
    config: &TuiConfig,
) -> Option<tokio::task::JoinHandle<()>> {
    match action {
        Action::Copy(text) => match config.runtime {
            Some(ref handle) => Some(copy_detached(
                handle,
                config.clipboard.clone(),
                state.clone(),
                text,
            )),
            None => {
                tracing::warn!("copy requested but no runtime is available");
                None
            }
        },
    }
}
