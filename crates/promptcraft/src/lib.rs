//! Core of the promptcraft prompt-engineering guide.
//!
//! The heart of the crate is the prompt assembly engine: a
//! [`PromptDraft`] with four optional slots (task, context, examples,
//! format) is turned into a single prompt string and a word count by
//! [`assemble`]. Everything else supports the guide built around it.
//!
//! # Quick start
//!
//! ```
//! use promptcraft::{PromptDraft, assemble};
//!
//! let draft = PromptDraft::new()
//!     .with_task("Write a product description")
//!     .with_format("3 bullet points");
//!
//! let out = assemble(&draft);
//! assert_eq!(out.prompt, "Write a product description Format: 3 bullet points");
//! assert_eq!(out.word_count, 8);
//! ```
//!
//! # Where to find things
//!
//! - **Assembly rules:** [`assemble()`] and [`word_count`] in [`mod@assemble`].
//!   Segments are ordered task, context, examples, format; only empty
//!   strings are skipped and only `format` gets a label.
//!
//! - **Templates:** [`PromptTemplate`], [`load_template`], and
//!   [`TemplateLibrary`] for the bundled templates plus user templates from
//!   a JSON file.
//!
//! - **Guide content:** [`guide`] has the static text for the home,
//!   fundamentals, and techniques views.
//!
//! - **Session state:** [`ui::GuideState`] is what a frontend renders;
//!   its transitions (`navigate`, `set_field`, `apply_template`, ...) are
//!   synchronous. [`ui::tracing::UiTracingLayer`] captures logs for display.
//!
//! - **Clipboard:** the [`clipboard::Clipboard`] trait and
//!   [`clipboard::copy_detached`] for fire-and-forget copies.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`draft`] | [`PromptDraft`] and [`DraftField`] |
//! | [`mod@assemble`] | [`assemble()`], [`AssembledPrompt`], word counting |
//! | [`template`] | [`PromptTemplate`], [`load_template`], [`TemplateLibrary`] |
//! | [`guide`] | [`Page`](guide::Page) and static educational content |
//! | [`clipboard`] | Clipboard trait, command/memory backends, detached copy |
//! | [`ui`] | Shared [`GuideState`](ui::GuideState) and tracing capture |

pub mod assemble;
pub mod clipboard;
pub mod draft;
pub mod error;
pub mod guide;
pub mod prelude;
pub mod template;
pub mod ui;

pub use assemble::{AssembledPrompt, FORMAT_LABEL, assemble, word_count};
pub use draft::{DraftField, PromptDraft};
pub use error::{Error, Result};
pub use guide::Page;
pub use template::{PromptTemplate, TemplateLibrary, builtin_templates, load_template};
