//! Convenience re-exports for frontends.
//!
//! ```ignore
//! use promptcraft::prelude::*;
//! ```

pub use crate::assemble::{AssembledPrompt, assemble};
pub use crate::clipboard::{
    Clipboard, ClipboardError, CommandClipboard, MemoryClipboard, NoClipboard, copy_detached,
};
pub use crate::draft::{DraftField, PromptDraft};
pub use crate::guide::Page;
pub use crate::template::{PromptTemplate, TemplateLibrary, load_template};
pub use crate::ui::tracing::{LogBuffer, UiTracingLayer};
pub use crate::ui::{COPY_FEEDBACK, GuideState};
