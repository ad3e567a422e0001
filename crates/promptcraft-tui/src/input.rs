//! Key handling for the guide TUI.
//!
//! Every key press becomes one synchronous transition on the shared
//! [`GuideState`]. Effects that leave the process (the clipboard) are
//! returned as an [`Action`] for the event loop to run.

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use promptcraft::guide::Page;
use promptcraft::template::TemplateLibrary;
use promptcraft::ui::{self, GuideState};

use crate::app::{Action, App, InputMode};

pub(crate) fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    state: &Arc<Mutex<GuideState>>,
    templates: &TemplateLibrary,
) -> Option<Action> {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return None;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(key, app, state, templates),
        InputMode::EditField => {
            handle_edit_key(key, app, state);
            None
        }
    }
}

fn current_page(state: &Arc<Mutex<GuideState>>) -> Page {
    state.lock().map(|s| s.page).unwrap_or_default()
}

fn handle_normal_key(
    key: KeyEvent,
    app: &mut App,
    state: &Arc<Mutex<GuideState>>,
    templates: &TemplateLibrary,
) -> Option<Action> {
    let page = current_page(state);

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(target) = Page::from_key(c) {
                go_to(app, state, target);
            }
        }
        KeyCode::Esc => go_to(app, state, Page::Home),
        KeyCode::Char('d') => ui::toggle_dark_mode(state),
        KeyCode::Char(',') => {
            app.show_logs = !app.show_logs;
            app.log_scroll = 0;
        }
        KeyCode::PageUp if app.show_logs => app.log_scroll = app.log_scroll.saturating_add(10),
        KeyCode::PageDown if app.show_logs => app.log_scroll = app.log_scroll.saturating_sub(10),
        _ if page == Page::Builder => return handle_builder_key(key, app, state, templates),
        KeyCode::Up | KeyCode::Char('k') => {
            app.content_scroll = app.content_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.content_scroll = app.content_scroll.saturating_add(1);
        }
        KeyCode::PageUp => app.content_scroll = app.content_scroll.saturating_sub(10),
        KeyCode::PageDown => app.content_scroll = app.content_scroll.saturating_add(10),
        KeyCode::Home => app.content_scroll = 0,
        _ => {}
    }
    None
}

fn go_to(app: &mut App, state: &Arc<Mutex<GuideState>>, page: Page) {
    ui::navigate(state, page);
    app.content_scroll = 0;
    app.status_message = None;
}

fn handle_builder_key(
    key: KeyEvent,
    app: &mut App,
    state: &Arc<Mutex<GuideState>>,
    templates: &TemplateLibrary,
) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.focused_field = app.focused_field.prev(),
        KeyCode::Down | KeyCode::Tab => app.focused_field = app.focused_field.next(),
        KeyCode::Enter | KeyCode::Char('e') => begin_edit(app, state),
        KeyCode::Char('g') => {
            ui::generate(state);
            app.status_message = Some("Prompt generated.".into());
        }
        KeyCode::Char('c') => {
            let prompt = state
                .lock()
                .map(|s| s.assembled.prompt.clone())
                .unwrap_or_default();
            if prompt.is_empty() {
                app.status_message = Some("Nothing to copy yet. Press [g] to generate.".into());
                return None;
            }
            return Some(Action::Copy(prompt));
        }
        KeyCode::Left => {
            if !templates.is_empty() {
                app.template_cursor =
                    (app.template_cursor + templates.len() - 1) % templates.len();
            }
        }
        KeyCode::Right => {
            if !templates.is_empty() {
                app.template_cursor = (app.template_cursor + 1) % templates.len();
            }
        }
        KeyCode::Char('l') => {
            if let Some(template) = templates.get(app.template_cursor) {
                ui::apply_template(state, template);
                app.status_message = Some(format!("Loaded template \"{}\".", template.name));
            }
        }
        KeyCode::Char('x') => {
            ui::clear_draft(state);
            app.status_message = Some("Draft cleared.".into());
        }
        _ => {}
    }
    None
}

fn begin_edit(app: &mut App, state: &Arc<Mutex<GuideState>>) {
    app.input_buffer = state
        .lock()
        .map(|s| s.draft.field(app.focused_field).to_string())
        .unwrap_or_default();
    app.edit_original = app.input_buffer.clone();
    app.input_mode = InputMode::EditField;
    app.status_message = None;
}

fn commit_edit(app: &mut App, state: &Arc<Mutex<GuideState>>) {
    let value = std::mem::take(&mut app.input_buffer);
    ui::set_field(state, app.focused_field, &value);
    app.edit_original.clear();
    app.input_mode = InputMode::Normal;
}

/// Push the in-progress buffer into the draft so the preview follows typing.
fn preview_edit(app: &App, state: &Arc<Mutex<GuideState>>) {
    ui::set_field(state, app.focused_field, &app.input_buffer);
}

fn handle_edit_key(key: KeyEvent, app: &mut App, state: &Arc<Mutex<GuideState>>) {
    match key.code {
        KeyCode::Enter => {
            commit_edit(app, state);
            app.status_message = Some(format!("{} updated.", app.focused_field.label()));
        }
        KeyCode::Tab => {
            // Commit and continue editing the next field.
            commit_edit(app, state);
            app.focused_field = app.focused_field.next();
            begin_edit(app, state);
        }
        KeyCode::Esc => {
            let original = std::mem::take(&mut app.edit_original);
            ui::set_field(state, app.focused_field, &original);
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
            app.status_message = Some("Edit cancelled.".into());
        }
        KeyCode::Backspace => {
            if app.input_buffer.pop().is_some() {
                preview_edit(app, state);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.push(c);
            preview_edit(app, state);
        }
        _ => {}
    }
}
