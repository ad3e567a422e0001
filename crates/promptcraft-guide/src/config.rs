//! Guide session configuration with sensible defaults.
//!
//! [`GuideConfig`] captures the startup settings of the interactive guide
//! and converts them into promptcraft types via
//! [`build_state`](GuideConfig::build_state) and
//! [`build_tui_config`](GuideConfig::build_tui_config).

use std::path::PathBuf;
use std::sync::Arc;

use promptcraft::clipboard::{Clipboard, CommandClipboard, NoClipboard};
use promptcraft::guide::Page;
use promptcraft::template::TemplateLibrary;
use promptcraft::ui::GuideState;
use promptcraft::ui::tracing::LogBuffer;
use promptcraft_tui::TuiConfig;

/// Configuration for an interactive guide session.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Start in dark mode. Default: `false`.
    pub dark_mode: bool,
    /// View shown at startup. Default: [`Page::Home`].
    pub start_page: Page,
    /// Re-assemble the prompt after every field edit. Default: `true`.
    pub live_preview: bool,
    /// JSON file with extra templates. Default: none.
    pub templates_file: Option<PathBuf>,
    /// Explicit copy command (e.g. `"xclip -selection clipboard"`).
    /// Default: auto-detect.
    pub clipboard_command: Option<String>,
    /// Open with the log pane visible. Default: `false`.
    pub show_logs: bool,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            start_page: Page::Home,
            live_preview: true,
            templates_file: None,
            clipboard_command: None,
            show_logs: false,
        }
    }
}

impl GuideConfig {
    /// Initial session state.
    pub fn build_state(&self) -> GuideState {
        GuideState {
            page: self.start_page,
            dark_mode: self.dark_mode,
            live_preview: self.live_preview,
            ..Default::default()
        }
    }

    /// Built-in templates merged with `templates_file`, if set.
    pub fn build_template_library(&self) -> promptcraft::Result<TemplateLibrary> {
        let mut library = TemplateLibrary::new();
        if let Some(ref path) = self.templates_file {
            library.load_file(path)?;
        }
        Ok(library)
    }

    /// The configured copy command, else the detected one, else a clipboard
    /// that always fails (so copy attempts just show no indicator).
    pub fn build_clipboard(&self) -> Arc<dyn Clipboard> {
        let command = match self.clipboard_command {
            Some(ref line) => CommandClipboard::from_command_line(line),
            None => CommandClipboard::detect(),
        };
        match command {
            Some(c) => {
                tracing::info!(command = c.program(), "using clipboard command");
                Arc::new(c)
            }
            None => {
                tracing::warn!("no clipboard command found; copy is disabled");
                Arc::new(NoClipboard)
            }
        }
    }

    /// Assemble a [`TuiConfig`] for this session.
    pub fn build_tui_config(
        &self,
        runtime: tokio::runtime::Handle,
        log_buffer: Option<LogBuffer>,
    ) -> promptcraft::Result<TuiConfig> {
        Ok(TuiConfig {
            clipboard: self.build_clipboard(),
            runtime: Some(runtime),
            templates: self.build_template_library()?,
            log_buffer,
            show_logs: self.show_logs,
        })
    }
}
