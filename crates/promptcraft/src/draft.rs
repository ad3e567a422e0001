//! The four-slot prompt draft edited by the user.

use serde::{Deserialize, Serialize};

/// One of the four named slots of a [`PromptDraft`].
///
/// Variants are declared in assembly order; [`DraftField::ALL`] iterates
/// them in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Task,
    Context,
    Examples,
    Format,
}

impl DraftField {
    /// All fields in assembly order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Task,
        DraftField::Context,
        DraftField::Examples,
        DraftField::Format,
    ];

    /// Display label for the builder form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Context => "Context",
            Self::Examples => "Examples",
            Self::Format => "Format",
        }
    }

    /// Placeholder hint shown while the field is empty.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Task => "What should the AI do? e.g. Write a product description",
            Self::Context => "Background and constraints, e.g. for an eco-friendly water bottle",
            Self::Examples => "Style or sample reference, e.g. in a playful, upbeat tone",
            Self::Format => "Desired output structure, e.g. 3 bullet points",
        }
    }

    /// Position of this field in assembly order (0-based).
    pub fn index(self) -> usize {
        match self {
            Self::Task => 0,
            Self::Context => 1,
            Self::Examples => 2,
            Self::Format => 3,
        }
    }

    /// Field after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Field before this one, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// An in-progress prompt: four independent, optional text slots.
///
/// A draft is a plain value. Empty strings mean "not filled in"; no field
/// is required and no content is validated or trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDraft {
    /// The action requested.
    pub task: String,
    /// Background and constraints.
    pub context: String,
    /// Style or sample reference.
    pub examples: String,
    /// Desired output structure.
    pub format: String,
}

impl PromptDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the task slot.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Builder-style setter for the context slot.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Builder-style setter for the examples slot.
    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }

    /// Builder-style setter for the format slot.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Read a slot by name.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Task => &self.task,
            DraftField::Context => &self.context,
            DraftField::Examples => &self.examples,
            DraftField::Format => &self.format,
        }
    }

    /// Replace a slot's whole content.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Task => self.task = value,
            DraftField::Context => self.context = value,
            DraftField::Examples => self.examples = value,
            DraftField::Format => self.format = value,
        }
    }

    /// True when every slot is the empty string.
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty() {
        let draft = PromptDraft::new();
        assert!(draft.is_empty());
        for field in DraftField::ALL {
            assert_eq!(draft.field(field), "");
        }
    }

    #[test]
    fn set_field_replaces_whole_value() {
        let mut draft = PromptDraft::new().with_task("first");
        draft.set_field(DraftField::Task, "second");
        assert_eq!(draft.task, "second");

        draft.set_field(DraftField::Format, "a table");
        assert_eq!(draft.field(DraftField::Format), "a table");
        assert!(!draft.is_empty());
    }

    #[test]
    fn whitespace_only_draft_is_not_empty() {
        let draft = PromptDraft::new().with_examples("   ");
        assert!(!draft.is_empty());
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(DraftField::Task.next(), DraftField::Context);
        assert_eq!(DraftField::Format.next(), DraftField::Task);
        assert_eq!(DraftField::Task.prev(), DraftField::Format);
        assert_eq!(DraftField::Examples.prev(), DraftField::Context);
    }

    #[test]
    fn all_is_in_assembly_order() {
        let indices: Vec<usize> = DraftField::ALL.iter().map(|f| f.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn deserialize_missing_fields_default_to_empty() {
        let draft: PromptDraft = serde_json::from_str(r#"{"task":"Summarize"}"#).unwrap();
        assert_eq!(draft.task, "Summarize");
        assert_eq!(draft.context, "");
        assert_eq!(draft.format, "");
    }
}
