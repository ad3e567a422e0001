//! End-to-end assembly scenarios for the prompt builder.
//!
//! These exercise the public API the way a frontend does: build or load a
//! draft, assemble it, and inspect the prompt and word count.

use promptcraft::ui::GuideState;
use promptcraft::{
    DraftField, PromptDraft, PromptTemplate, TemplateLibrary, assemble, load_template,
};

fn draft(task: &str, context: &str, examples: &str, format: &str) -> PromptDraft {
    PromptDraft {
        task: task.into(),
        context: context.into(),
        examples: examples.into(),
        format: format.into(),
    }
}

// ── Empty and single-field drafts ─────────────────────────────────────

#[test]
fn all_empty_gives_empty_prompt_and_one_word() {
    let out = assemble(&draft("", "", "", ""));
    assert_eq!(out.prompt, "");
    assert_eq!(out.word_count, 1);
}

#[test]
fn single_field_is_verbatim() {
    let content = "Explain recursion to a five year old";
    let tokens = content.split(' ').count();

    for field in [DraftField::Task, DraftField::Context, DraftField::Examples] {
        let mut d = PromptDraft::new();
        d.set_field(field, content);
        let out = assemble(&d);
        assert_eq!(out.prompt, content, "field {field:?}");
        assert_eq!(out.word_count, tokens, "field {field:?}");
    }

    let out = assemble(&PromptDraft::new().with_format(content));
    assert_eq!(out.prompt, format!("Format: {content}"));
    assert_eq!(out.word_count, tokens + 1);
}

// ── Ordering ──────────────────────────────────────────────────────────

#[test]
fn order_is_fixed_regardless_of_population() {
    assert_eq!(assemble(&draft("", "B", "", "F")).prompt, "B Format: F");
    assert_eq!(assemble(&draft("A", "", "C", "")).prompt, "A C");
    assert_eq!(assemble(&draft("", "", "C", "F")).prompt, "C Format: F");
    assert_eq!(assemble(&draft("A", "B", "C", "F")).prompt, "A B C Format: F");
}

#[test]
fn whitespace_only_fields_are_included() {
    let out = assemble(&draft(" ", "", "", ""));
    assert_eq!(out.prompt, " ");
    assert_eq!(out.word_count, 2);

    let out = assemble(&draft("A", "\t", "", ""));
    assert_eq!(out.prompt, "A \t");
}

// ── Templates ─────────────────────────────────────────────────────────

#[test]
fn literal_email_scenario() {
    let d = draft(
        "Write a professional email response",
        "to a customer inquiry about product specifications",
        "using a helpful and knowledgeable tone",
        "2-3 paragraphs with greeting and signature",
    );
    let out = assemble(&d);
    assert_eq!(
        out.prompt,
        "Write a professional email response to a customer inquiry about product \
         specifications using a helpful and knowledgeable tone Format: 2-3 paragraphs \
         with greeting and signature"
    );
    assert_eq!(out.word_count, 25);
}

#[test]
fn load_then_assemble_as_two_steps() {
    let library = TemplateLibrary::new();
    let template = library.find("Professional Email").unwrap();

    // A stale draft that a deferred state commit would have assembled.
    let stale = draft("old task", "", "", "");

    // Step 1: load.
    let loaded = load_template(template);
    assert_ne!(loaded, stale);

    // Step 2: assemble the loaded draft, not the stale one.
    let out = assemble(&loaded);
    assert_eq!(
        out.prompt,
        "Write a professional email response to a customer inquiry about product \
         specifications using a helpful and knowledgeable tone Format: 2-3 paragraphs \
         with greeting and signature"
    );
    assert_ne!(out, assemble(&stale));
}

#[test]
fn every_builtin_template_round_trips_through_session() {
    for template in TemplateLibrary::new().templates() {
        let mut state = GuideState {
            live_preview: false,
            ..Default::default()
        };
        state.set_field(DraftField::Task, "unsaved edit");
        state.apply_template(template);
        assert_eq!(state.assembled, assemble(&template.draft), "{}", template.name);
    }
}

#[test]
fn sparse_user_template_assembles_without_gaps() {
    let template = PromptTemplate::new("Sparse", "", "for new hires", "", "a checklist");
    let out = assemble(&load_template(&template));
    assert_eq!(out.prompt, "for new hires Format: a checklist");
}

// ── Determinism ───────────────────────────────────────────────────────

#[test]
fn assembling_twice_is_identical() {
    let d = draft("Translate", "into French", "formal register", "one paragraph");
    let first = assemble(&d);
    let second = assemble(&d);
    assert_eq!(first, second);
    assert_eq!(first.word_count, second.word_count);
}
