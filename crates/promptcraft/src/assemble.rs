//! The prompt assembly engine.
//!
//! [`assemble`] turns a [`PromptDraft`] into a single prompt string plus a
//! word count. It is a pure function of the draft: no hidden state, no
//! trimming, and a fixed segment order of task, context, examples, format.

use serde::{Deserialize, Serialize};

use crate::draft::PromptDraft;

/// Label prepended to the format segment.
pub const FORMAT_LABEL: &str = "Format: ";

/// Separator placed between segments.
pub const SEGMENT_SEPARATOR: char = ' ';

/// The result of assembling a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledPrompt {
    /// The joined prompt text.
    pub prompt: String,
    /// Number of pieces obtained by splitting `prompt` on single spaces.
    pub word_count: usize,
}

impl AssembledPrompt {
    /// True when no draft field contributed a segment.
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty()
    }
}

/// Ordered, non-empty segments of a draft, with the format label applied.
///
/// A field is skipped only when it is the empty string; whitespace-only
/// content is kept verbatim.
pub fn segments(draft: &PromptDraft) -> Vec<String> {
    let mut parts = Vec::with_capacity(4);
    for text in [&draft.task, &draft.context, &draft.examples] {
        if !text.is_empty() {
            parts.push(text.clone());
        }
    }
    if !draft.format.is_empty() {
        parts.push(format!("{FORMAT_LABEL}{}", draft.format));
    }
    parts
}

/// Count words by splitting on the single space character.
///
/// Empty pieces are counted, so `""` yields 1 and doubled spaces add a
/// piece.
pub fn word_count(text: &str) -> usize {
    text.split(SEGMENT_SEPARATOR).count()
}

/// Assemble a draft into a prompt and its word count.
pub fn assemble(draft: &PromptDraft) -> AssembledPrompt {
    let prompt = segments(draft).join(" ");
    let word_count = word_count(&prompt);
    tracing::debug!(word_count, chars = prompt.len(), "assembled prompt");
    AssembledPrompt { prompt, word_count }
}
