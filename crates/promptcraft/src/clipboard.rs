//! Clipboard boundary for copying the generated prompt.
//!
//! Copying is fire-and-forget: [`copy_detached`] spawns the write on a tokio
//! runtime and returns immediately. A successful write stamps
//! [`GuideState::copied_at`](crate::ui::GuideState) so the frontend can show
//! a short "copied" indicator; a failure is logged and otherwise ignored.

use std::future::Future;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::{GuideState, mark_copied};

/// Why a clipboard write did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no clipboard command available")]
    Unavailable,

    #[error("failed to start clipboard command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to clipboard: {0}")]
    Write(#[source] std::io::Error),

    #[error("clipboard command exited with {status}")]
    CommandFailed { status: ExitStatus },
}

/// Boxed future returned by [`Clipboard::write_text`].
pub type ClipboardFuture<'a> =
    Pin<Box<dyn Future<Output = Result<(), ClipboardError>> + Send + 'a>>;

/// Something that can receive text as the system clipboard would.
pub trait Clipboard: Send + Sync {
    /// Short name for logs and the status bar.
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> ClipboardFuture<'_>;
}

// ── CommandClipboard ──────────────────────────────────────────────────

/// Clipboard backed by an external copy command that reads stdin
/// (`wl-copy`, `xclip`, `pbcopy`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Use an explicit command, e.g. `CommandClipboard::new("xclip", ["-selection", "clipboard"])`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a whitespace-separated command line such as `"xsel -ib"`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    /// Pick the copy command for the current platform and session.
    pub fn detect() -> Option<Self> {
        detect_with(
            cfg!(target_os = "macos"),
            cfg!(windows),
            |key| std::env::var_os(key).is_some(),
            find_on_path,
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Selection logic behind [`CommandClipboard::detect`], with the
/// environment probes injected.
fn detect_with(
    macos: bool,
    windows: bool,
    has_env: impl Fn(&str) -> bool,
    on_path: impl Fn(&str) -> bool,
) -> Option<CommandClipboard> {
    if macos {
        return Some(CommandClipboard::new("pbcopy", Vec::<String>::new()));
    }
    if windows {
        return Some(CommandClipboard::new("clip.exe", Vec::<String>::new()));
    }
    if has_env("WAYLAND_DISPLAY") && on_path("wl-copy") {
        return Some(CommandClipboard::new("wl-copy", Vec::<String>::new()));
    }
    if on_path("xclip") {
        return Some(CommandClipboard::new("xclip", ["-selection", "clipboard"]));
    }
    if on_path("xsel") {
        return Some(CommandClipboard::new("xsel", ["--clipboard", "--input"]));
    }
    // WSL exposes the Windows clipboard without a Linux-side tool.
    if on_path("clip.exe") {
        return Some(CommandClipboard::new("clip.exe", Vec::<String>::new()));
    }
    None
}

fn find_on_path(program: &str) -> bool {
    std::env::var_os("PATH").is_some_and(|paths| {
        std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
    })
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn write_text(&self, text: &str) -> ClipboardFuture<'_> {
        let text = text.to_string();
        Box::pin(async move {
            let mut child = tokio::process::Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| ClipboardError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .await
                    .map_err(ClipboardError::Write)?;
                // Dropping stdin closes the pipe so the command sees EOF.
            }

            let status = child.wait().await.map_err(ClipboardError::Write)?;
            if status.success() {
                Ok(())
            } else {
                Err(ClipboardError::CommandFailed { status })
            }
        })
    }
}

// ── MemoryClipboard ───────────────────────────────────────────────────

/// In-process clipboard, for tests and sessions with no system clipboard.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_text(&self, text: &str) -> ClipboardFuture<'_> {
        let text = text.to_string();
        Box::pin(async move {
            *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(text);
            Ok(())
        })
    }
}

/// Clipboard that always reports [`ClipboardError::Unavailable`].
///
/// Used when no copy command could be detected, so copy attempts fail the
/// normal way instead of being special-cased by the frontend.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn name(&self) -> &str {
        "none"
    }

    fn write_text(&self, _text: &str) -> ClipboardFuture<'_> {
        Box::pin(async { Err(ClipboardError::Unavailable) })
    }
}

// ── Detached copy ─────────────────────────────────────────────────────

/// Copy `text` on the runtime behind `handle` without waiting for it.
///
/// On success the copy indicator is stamped in `state`; on failure a
/// warning is logged and the indicator is left alone. No retry. The
/// returned handle may be dropped; tests await it.
pub fn copy_detached(
    handle: &Handle,
    clipboard: Arc<dyn Clipboard>,
    state: Arc<Mutex<GuideState>>,
    text: String,
) -> JoinHandle<()> {
    handle.spawn(async move {
        match clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::debug!(
                    clipboard = clipboard.name(),
                    chars = text.len(),
                    "copied prompt"
                );
                mark_copied(&state, Instant::now());
            }
            Err(e) => {
                tracing::warn!(clipboard = clipboard.name(), "copy failed: {e}");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_clipboard_stores_text_and_marks_state() {
        let clipboard = MemoryClipboard::new();
        let state = Arc::new(Mutex::new(GuideState::default()));

        copy_detached(
            &Handle::current(),
            Arc::new(clipboard.clone()),
            state.clone(),
            "Write a haiku".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("Write a haiku"));
        let s = state.lock().unwrap();
        assert!(s.copied_at.is_some());
        assert!(s.copy_indicator_active(Instant::now()));
    }

    #[tokio::test]
    async fn failed_copy_leaves_indicator_unset() {
        let state = Arc::new(Mutex::new(GuideState::default()));

        copy_detached(
            &Handle::current(),
            Arc::new(NoClipboard),
            state.clone(),
            "anything".to_string(),
        )
        .await
        .unwrap();

        assert!(state.lock().unwrap().copied_at.is_none());
    }

    #[tokio::test]
    async fn missing_command_reports_spawn_error() {
        let clipboard = CommandClipboard::new("promptcraft-no-such-copy-command", ["--flag"]);
        let err = clipboard.write_text("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
        assert!(err.to_string().contains("promptcraft-no-such-copy-command"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn command_clipboard_pipes_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", out.display());
        let clipboard = CommandClipboard::new("sh", ["-c".to_string(), script]);

        clipboard.write_text("B Format: F").await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "B Format: F");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_command_failed() {
        let clipboard = CommandClipboard::new("sh", ["-c", "cat > /dev/null; exit 3"]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }));
    }

    #[test]
    fn from_command_line_splits_args() {
        let c = CommandClipboard::from_command_line("xsel -ib").unwrap();
        assert_eq!(c.program(), "xsel");
        assert_eq!(c.args(), ["-ib".to_string()]);
        assert!(CommandClipboard::from_command_line("   ").is_none());
    }

    #[test]
    fn detect_prefers_platform_tools() {
        let none = |_: &str| false;
        assert_eq!(detect_with(true, false, none, none).unwrap().program(), "pbcopy");
        assert_eq!(detect_with(false, true, none, none).unwrap().program(), "clip.exe");
        assert!(detect_with(false, false, none, none).is_none());
    }

    #[test]
    fn detect_linux_order() {
        let wayland = |key: &str| key == "WAYLAND_DISPLAY";
        let all = |_: &str| true;
        assert_eq!(detect_with(false, false, wayland, all).unwrap().program(), "wl-copy");

        let no_env = |_: &str| false;
        let c = detect_with(false, false, no_env, all).unwrap();
        assert_eq!(c.program(), "xclip");
        assert_eq!(c.args(), ["-selection".to_string(), "clipboard".to_string()]);

        let only_xsel = |p: &str| p == "xsel";
        assert_eq!(detect_with(false, false, no_env, only_xsel).unwrap().program(), "xsel");
    }
}
