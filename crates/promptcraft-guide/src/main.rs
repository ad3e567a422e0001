//! Interactive terminal prompt-engineering guide.
//!
//! # Examples
//!
//! ```sh
//! # Open on the home page
//! promptcraft-guide
//!
//! # Jump straight into the builder, dark theme, with extra templates
//! promptcraft-guide --page builder --dark --templates-file my-templates.json
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use promptcraft::guide::Page;
use promptcraft::ui::tracing::UiTracingLayer;
use promptcraft_guide::GuideConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Interactive terminal prompt-engineering guide.
#[derive(Parser)]
#[command(name = "promptcraft-guide")]
struct Cli {
    /// Page to open: home, fundamentals, builder, or techniques.
    #[arg(long, default_value = "home", value_parser = parse_page)]
    page: Page,

    /// Start in dark mode.
    #[arg(long)]
    dark: bool,

    /// Only assemble when [g] is pressed, not after every edit.
    #[arg(long)]
    no_live_preview: bool,

    /// JSON file with extra templates.
    #[arg(long)]
    templates_file: Option<PathBuf>,

    /// Copy command that reads the prompt from stdin.
    #[arg(long)]
    clipboard_command: Option<String>,

    /// Show the log pane at startup.
    #[arg(long)]
    logs: bool,
}

fn parse_page(s: &str) -> Result<Page, String> {
    Page::parse(s).ok_or_else(|| {
        format!("unknown page '{s}' (expected home, fundamentals, builder, or techniques)")
    })
}

impl From<Cli> for GuideConfig {
    fn from(cli: Cli) -> Self {
        GuideConfig {
            dark_mode: cli.dark,
            start_page: cli.page,
            live_preview: !cli.no_live_preview,
            templates_file: cli.templates_file,
            clipboard_command: cli.clipboard_command,
            show_logs: cli.logs,
        }
    }
}

#[tokio::main]
async fn main() {
    let config = GuideConfig::from(Cli::parse());

    // Set up tracing → TUI log buffer.
    let (tracing_layer, log_buffer) = UiTracingLayer::new();
    tracing_subscriber::registry().with(tracing_layer).init();

    let runtime = tokio::runtime::Handle::current();
    let tui_config = match config.build_tui_config(runtime, Some(log_buffer)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(Mutex::new(config.build_state()));
    tracing::info!(page = ?config.start_page, "guide started");

    // The TUI owns a dedicated thread; the runtime stays free for
    // clipboard tasks.
    let tui_handle = promptcraft_tui::spawn_tui(state, tui_config);
    let joined = match tokio::task::spawn_blocking(move || tui_handle.join()).await {
        Ok(joined) => joined,
        Err(e) => {
            eprintln!("Error: failed to wait for TUI thread: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = tui_outcome(joined) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Collapse the TUI thread's join result into one error message.
fn tui_outcome(joined: std::thread::Result<io::Result<()>>) -> Result<(), String> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(format!("TUI failed: {e}")),
        Err(_) => Err("TUI thread panicked".into()),
    }
}
