//! Tracing subscriber layer that captures log events into a [`LogBuffer`]
//! for later draining into [`GuideState::logs`](super::GuideState).
//!
//! The buffer has its own mutex, separate from `GuideState`, so a log call
//! from a clipboard task never waits on the render thread.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;

use super::{GuideState, LOG_TRIM_TO, LogLevel, LogLine, MAX_LOG_LINES};

/// A shared buffer of pending log lines.
#[derive(Clone)]
pub struct LogBuffer(Arc<Mutex<Vec<LogLine>>>);

impl LogBuffer {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::with_capacity(128))))
    }

    /// Drain all pending log lines from the buffer, returning them.
    pub fn drain(&self) -> Vec<LogLine> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buf)
    }

    /// Drain pending log lines into `GuideState::logs`, respecting the trim
    /// limits. Acquires the state lock only if there are new lines.
    pub fn flush_into(&self, state: &Arc<Mutex<GuideState>>) {
        let lines = self.drain();
        if lines.is_empty() {
            return;
        }
        if let Ok(mut s) = state.lock() {
            s.logs.extend(lines);
            if s.logs.len() > MAX_LOG_LINES {
                let trim_to = s.logs.len() - LOG_TRIM_TO;
                s.logs.drain(..trim_to);
            }
        }
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut buf) = self.0.lock() {
            buf.push(line);
            if buf.len() > MAX_LOG_LINES {
                let trim_to = buf.len() - LOG_TRIM_TO;
                buf.drain(..trim_to);
            }
        }
    }
}

/// A [`tracing_subscriber::Layer`] that captures log events into a
/// [`LogBuffer`] so the guide can show them in its log pane.
pub struct UiTracingLayer {
    buffer: LogBuffer,
}

impl UiTracingLayer {
    /// Create a new tracing layer and its associated [`LogBuffer`].
    pub fn new() -> (Self, LogBuffer) {
        let buffer = LogBuffer::new();
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for UiTracingLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = match *event.metadata().level() {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        };

        self.buffer.push(LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message: visitor.into_message(),
        });
    }
}

/// Visitor that extracts the message and extra fields from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl MessageVisitor {
    /// Message text with any extra fields appended as `{k=v, ...}`.
    fn into_message(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let extras: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if self.message.is_empty() {
            extras.join(" ")
        } else {
            format!("{} {{{}}}", self.message, extras.join(", "))
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let raw = format!("{value:?}");
        if field.name() == "message" {
            self.message = raw;
        } else {
            self.fields.push((field.name().to_string(), raw));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}
