//! Rendering for the guide TUI.
//!
//! Renders from a [`GuideState`] snapshot taken by the event loop, so no
//! lock is held while widgets are built.

use std::time::Instant;

use promptcraft::DraftField;
use promptcraft::guide::{self, Page};
use promptcraft::template::TemplateLibrary;
use promptcraft::ui::{GuideState, LogLevel, LogLine};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, InputMode};
use crate::theme::Theme;

// ── Public Utilities ──────────────────────────────────────────────────

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render(frame: &mut Frame, snap: &GuideState, app: &App, templates: &TemplateLibrary) {
    let theme = Theme::for_mode(snap.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    // Outer layout: [3] header | [flex] page | [3] footer.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, chunks[0], snap, &theme);
    render_footer(frame, chunks[2], snap.page, app, &theme);

    if app.show_logs {
        let mid = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        render_page(frame, mid[0], snap, app, templates, &theme);
        render_logs(frame, mid[1], &snap.logs, app, &theme);
    } else {
        render_page(frame, chunks[1], snap, app, templates, &theme);
    }
}

fn render_page(
    frame: &mut Frame,
    area: Rect,
    snap: &GuideState,
    app: &App,
    templates: &TemplateLibrary,
    theme: &Theme,
) {
    match snap.page {
        Page::Home => render_text_page(frame, area, home_lines(theme), app, theme),
        Page::Fundamentals => render_text_page(frame, area, fundamentals_lines(theme), app, theme),
        Page::Techniques => render_text_page(frame, area, techniques_lines(theme), app, theme),
        Page::Builder => render_builder(frame, area, snap, app, templates, theme),
    }
}

// ── Header ────────────────────────────────────────────────────────────

fn render_header(frame: &mut Frame, area: Rect, snap: &GuideState, theme: &Theme) {
    let mut spans = vec![Span::styled(" Prompt Craft ", theme.title()), Span::raw("  ")];
    for page in Page::ALL {
        let label = format!(" [{}] {} ", page.key(), short_title(page));
        let style = if page == snap.page {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(label, style));
    }
    let mode = if snap.dark_mode { "  dark [d]" } else { "  light [d]" };
    spans.push(Span::styled(mode, theme.muted()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border(false));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn short_title(page: Page) -> &'static str {
    match page {
        Page::Home => "Home",
        Page::Fundamentals => "Fundamentals",
        Page::Builder => "Builder",
        Page::Techniques => "Techniques",
    }
}

// ── Text Pages ────────────────────────────────────────────────────────

fn render_text_page(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    app: &App,
    theme: &Theme,
) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let scroll = app.content_scroll.min(rows.saturating_sub(inner_height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn home_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("Master the Art of Prompt Engineering", theme.title()),
        Line::raw(""),
        Line::raw(guide::HOME_INTRO),
        Line::raw(""),
    ];
    for h in guide::home_highlights() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", h.page.key()), Style::default().fg(theme.highlight)),
            Span::styled(h.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::styled(format!("    {}", h.body), theme.muted()));
        lines.push(Line::raw(""));
    }
    lines
}

fn fundamentals_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(Page::Fundamentals.title(), theme.title()),
        Line::styled(Page::Fundamentals.summary(), theme.muted()),
        Line::raw(""),
    ];
    for (i, f) in guide::fundamentals().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {}", i + 1, f.title),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({} field)", f.field.label()), theme.muted()),
        ]));
        lines.push(Line::raw(format!("   {}", f.description)));
        lines.push(Line::styled(
            format!("   Example: \"{}\"", f.example),
            theme.muted().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "Put them together in the builder: press [3].",
        Style::default().fg(theme.highlight),
    ));
    lines
}

fn techniques_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(Page::Techniques.title(), theme.title()),
        Line::styled(Page::Techniques.summary(), theme.muted()),
        Line::raw(""),
    ];
    for t in guide::techniques() {
        lines.push(Line::styled(
            t.name,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(format!("  {}", t.summary)));
        lines.push(Line::from(vec![
            Span::styled("  When to use: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(t.when_to_use),
        ]));
        for (i, example_line) in t.example.lines().enumerate() {
            let prefix = if i == 0 { "  Example: " } else { "           " };
            lines.push(Line::styled(
                format!("{prefix}{example_line}"),
                theme.muted().add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::raw(""));
    }
    lines
}

// ── Builder ───────────────────────────────────────────────────────────

fn render_builder(
    frame: &mut Frame,
    area: Rect,
    snap: &GuideState,
    app: &App,
    templates: &TemplateLibrary,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(columns[0]);

    for field in DraftField::ALL {
        render_field(frame, left[field.index()], field, snap, app, theme);
    }
    render_templates(frame, left[4], snap, app, templates, theme);
    render_generated(frame, columns[1], snap, theme);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: DraftField,
    snap: &GuideState,
    app: &App,
    theme: &Theme,
) {
    let focused = app.focused_field == field;
    let editing = focused && app.input_mode == InputMode::EditField;

    let content = if editing {
        Line::raw(format!("{}\u{2588}", app.input_buffer))
    } else {
        let value = snap.draft.field(field);
        if value.is_empty() {
            Line::styled(field.hint(), theme.muted().add_modifier(Modifier::ITALIC))
        } else {
            Line::raw(value.to_string())
        }
    };

    let title = if editing {
        format!(" {} (editing) ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(title);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_templates(
    frame: &mut Frame,
    area: Rect,
    snap: &GuideState,
    app: &App,
    templates: &TemplateLibrary,
    theme: &Theme,
) {
    let lines: Vec<Line> = templates
        .templates()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let selected = i == app.template_cursor;
            let marker = if selected { "\u{25b8} " } else { "  " };
            let style = if selected {
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(format!("{marker}{}", t.name), style)];
            if snap.loaded_template.as_deref() == Some(t.name.as_str()) {
                spans.push(Span::styled(" (loaded)", theme.muted()));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(" Templates [\u{2190}/\u{2192}] choose  [l] load ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_generated(frame: &mut Frame, area: Rect, snap: &GuideState, theme: &Theme) {
    let mut title = vec![Span::styled(" Generated Prompt ", theme.title())];
    if !snap.assembled.is_empty() {
        title.push(Span::styled(
            format!("({} words) ", snap.assembled.word_count),
            theme.muted(),
        ));
    }
    if snap.copy_indicator_active(Instant::now()) {
        title.push(Span::styled(
            "\u{2713} Copied! ",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ));
    }

    let body = if snap.assembled.is_empty() {
        vec![Line::styled(
            "Fill in the fields, then press [g] to generate your prompt.",
            theme.muted().add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Line::raw(snap.assembled.prompt.clone())]
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(Line::from(title));
    let paragraph = Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine], app: &App, theme: &Theme) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(logs.len());
    for log in logs {
        // Per-assembly debug lines would drown everything else.
        if matches!(log.level, LogLevel::Trace | LogLevel::Debug) {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", log.time), theme.muted()),
            Span::styled(format!("{} ", log.level.label()), log_level_style(log.level)),
            Span::raw(log.message.as_str()),
        ]));
    }

    let total = lines.len();
    let scroll = total
        .saturating_sub(inner_height)
        .saturating_sub(app.log_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(" Log ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Footer ────────────────────────────────────────────────────────────

fn render_footer(frame: &mut Frame, area: Rect, page: Page, app: &App, theme: &Theme) {
    let (hint, style) = match app.input_mode {
        InputMode::EditField => {
            let char_count = app.input_buffer.chars().count();
            (
                format!(
                    " Editing {} ({char_count} chars)  [Enter] save  [Tab] save & next  [Esc] cancel ",
                    app.focused_field.label()
                ),
                Style::default().fg(theme.highlight),
            )
        }
        InputMode::Normal => {
            let hint = match (&app.status_message, page) {
                (Some(msg), _) => msg.clone(),
                (None, Page::Builder) => "[\u{2191}/\u{2193}] field  [Enter] edit  [g] generate  \
                     [c] copy  [x] clear  [1-4] pages  [d] theme  [q] quit"
                    .to_string(),
                (None, _) => "[1-4] pages  [\u{2191}/\u{2193}] scroll  [d] theme  [,] logs  [q] quit"
                    .to_string(),
            };
            (format!(" {hint} "), theme.muted())
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(hint);
    frame.render_widget(Block::default().style(theme.base()), area);
    frame.render_widget(block, area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use promptcraft::template::builtin_templates;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(snap: &GuideState, app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let templates = TemplateLibrary::new();
        terminal
            .draw(|frame| render(frame, snap, app, &templates))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn home_page_shows_navigation() {
        let text = draw(&GuideState::default(), &App::new());
        assert!(text.contains("Prompt Craft"));
        assert!(text.contains("[2] Fundamentals"));
        assert!(text.contains("Learn the Fundamentals"));
    }

    #[test]
    fn builder_shows_generated_prompt_and_count() {
        let mut snap = GuideState::default();
        snap.navigate(Page::Builder);
        snap.apply_template(&builtin_templates()[0]);

        let text = draw(&snap, &App::new());
        assert!(text.contains("Generated Prompt"));
        assert!(text.contains("(25 words)"));
        assert!(text.contains("Professional Email (loaded)"));
    }

    #[test]
    fn builder_shows_copy_indicator_only_when_recent() {
        let mut snap = GuideState::default();
        snap.navigate(Page::Builder);
        snap.set_field(DraftField::Task, "Hi");

        assert!(!draw(&snap, &App::new()).contains("Copied!"));

        snap.copied_at = Some(Instant::now());
        assert!(draw(&snap, &App::new()).contains("Copied!"));
    }

    #[test]
    fn empty_builder_hides_word_count() {
        let mut snap = GuideState::default();
        snap.navigate(Page::Builder);
        let text = draw(&snap, &App::new());
        assert!(!text.contains("words)"));
        assert!(text.contains("press [g] to generate"));
    }

    #[test]
    fn techniques_page_lists_techniques() {
        let mut snap = GuideState::default();
        snap.navigate(Page::Techniques);
        let text = draw(&snap, &App::new());
        assert!(text.contains("Few-Shot Prompting"));
    }

    #[test]
    fn scrolling_past_the_end_keeps_page_visible() {
        let mut snap = GuideState::default();
        snap.navigate(Page::Fundamentals);
        let mut app = App::new();
        app.content_scroll = 200;

        let text = draw(&snap, &app);
        assert!(text.contains("Output Format"));
        assert!(text.contains("Put them together in the builder"));

        app.content_scroll = usize::MAX;
        assert!(draw(&snap, &app).contains("Put them together in the builder"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let mut app = App::new();
        app.status_message = Some("Draft cleared.".into());
        assert!(draw(&GuideState::default(), &app).contains("Draft cleared."));
    }

    #[test]
    fn log_level_style_colors() {
        assert_eq!(log_level_style(LogLevel::Warn).fg, Some(Color::Yellow));
        assert_eq!(log_level_style(LogLevel::Info).fg, Some(Color::Green));
        assert!(
            log_level_style(LogLevel::Error)
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }
}
