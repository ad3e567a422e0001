//! Predefined drafts and the template library.
//!
//! A [`PromptTemplate`] is a named [`PromptDraft`] used only to overwrite
//! the current draft wholesale via [`load_template`]. The
//! [`TemplateLibrary`] holds the bundled templates and, optionally, user
//! templates read from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draft::PromptDraft;
use crate::error::{Error, Result};

/// A named, predefined draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Display name (e.g. "Professional Email").
    pub name: String,
    /// The draft this template writes into the builder.
    #[serde(flatten)]
    pub draft: PromptDraft,
}

impl PromptTemplate {
    /// Create a template from its four fields.
    pub fn new(
        name: impl Into<String>,
        task: impl Into<String>,
        context: impl Into<String>,
        examples: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            draft: PromptDraft {
                task: task.into(),
                context: context.into(),
                examples: examples.into(),
                format: format.into(),
            },
        }
    }
}

/// Replace a draft with a template's content, field for field.
///
/// There is no merge: any unsaved edits in the previous draft are
/// discarded by the caller assigning the returned value.
pub fn load_template(template: &PromptTemplate) -> PromptDraft {
    tracing::info!(template = %template.name, "loaded template");
    template.draft.clone()
}

/// The templates bundled with the guide, in display order.
pub fn builtin_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::new(
            "Professional Email",
            "Write a professional email response",
            "to a customer inquiry about product specifications",
            "using a helpful and knowledgeable tone",
            "2-3 paragraphs with greeting and signature",
        ),
        PromptTemplate::new(
            "Creative Writing",
            "Write a short story",
            "about a robot discovering emotions for the first time",
            "in the style of Ray Bradbury with vivid sensory details",
            "500 words with a twist ending",
        ),
        PromptTemplate::new(
            "Code Explanation",
            "Explain how this code works",
            "for a junior developer new to the codebase",
            "using analogies and step-by-step reasoning",
            "numbered steps followed by a one-sentence summary",
        ),
        PromptTemplate::new(
            "Data Analysis",
            "Analyze the quarterly sales figures",
            "for a retail business comparing this year to last year",
            "highlighting trends the way a financial analyst would",
            "executive summary, key findings as bullets, then recommendations",
        ),
    ]
}

/// Ordered collection of templates available to the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateLibrary {
    templates: Vec<PromptTemplate>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }
}

impl TemplateLibrary {
    /// Library containing only the bundled templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// All templates in display order.
    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template at a display position.
    pub fn get(&self, index: usize) -> Option<&PromptTemplate> {
        self.templates.get(index)
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&PromptTemplate> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Like [`find`](Self::find) but reports a missing name as an error.
    pub fn require(&self, name: &str) -> Result<&PromptTemplate> {
        self.find(name)
            .ok_or_else(|| Error::UnknownTemplate(name.to_string()))
    }

    /// Add a template. A template whose name matches an existing entry
    /// (case-insensitively) replaces it in place; otherwise it is appended.
    pub fn insert(&mut self, template: PromptTemplate) {
        if let Some(existing) = self
            .templates
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(&template.name))
        {
            *existing = template;
        } else {
            self.templates.push(template);
        }
    }

    /// Merge templates from a JSON file containing an array of
    /// `{"name", "task", "context", "examples", "format"}` objects.
    ///
    /// Returns the number of templates read from the file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<PromptTemplate> =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let count = entries.len();
        for entry in entries {
            self.insert(entry);
        }
        tracing::info!(path = %path.display(), count, "merged templates file");
        Ok(count)
    }
}
