use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::diagnostics::{Severity, summary};
use crate::keybinds::KeyAction;
use crate::theme::Theme;
use crate::types::{Focus, SideView};
use crate::util::{side_views, to_u16_saturating};

use super::helpers::{icon_color, panel_block, row_prefix};

const EXTENSIONS: [(&str, &str, &str); 4] = [
    (
        "CodeCraft AI Assistant",
        "v1.2.0 • Installed",
        "AI-powered code completion and suggestions",
    ),
    (
        "Git History",
        "v2.1.3",
        "View and search git log along with graph and details",
    ),
    (
        "Theme: Night Owl",
        "v3.0.1",
        "A dark theme optimized for night coding",
    ),
    ("Live Preview", "v1.0.5", "Live preview for HTML/CSS/JS files"),
];

pub(crate) fn render_activity_bar(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg_alt)),
        area,
    );
    for (i, view) in side_views().into_iter().enumerate() {
        let y = area.y + to_u16_saturating(i * 2);
        if y + 1 >= area.y.saturating_add(area.height) {
            break;
        }
        let cell = Rect::new(area.x, y, area.width, 2);
        let style = if view == app.side_view {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        let marker = if view == app.side_view { "▎" } else { " " };
        frame.render_widget(
            Paragraph::new(format!("{marker}{} ", view.icon())).style(style),
            cell,
        );
        app.rects.activity.push((cell, view));
    }
}

pub(crate) fn render_side_panel(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    let focused = app.focus == Focus::Explorer;
    let block = panel_block(&theme, focused).title(app.side_view.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.rects.side = area;

    let muted = Style::default().fg(theme.fg_muted);
    match app.side_view {
        SideView::Explorer => render_explorer(app, frame, inner, &theme),
        SideView::Search => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(inner);
            render_input(frame, chunks[0], "Search in files", "", false, &theme);
            frame.render_widget(Paragraph::new("No results found").style(muted), chunks[1]);
        }
        SideView::SourceControl => {
            frame.render_widget(Paragraph::new("No changes detected").style(muted), inner);
        }
        SideView::RunDebug => {
            let button = Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(" Start Debugging ", button))),
                inner,
            );
        }
        SideView::Extensions => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(inner);
            render_input(frame, chunks[0], "Search extensions", "", false, &theme);
            let mut lines = Vec::new();
            for (name, version, description) in EXTENSIONS {
                lines.push(Line::from(Span::styled(
                    name,
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(version, muted)));
                lines.push(Line::from(description));
                lines.push(Line::from(""));
            }
            frame.render_widget(
                Paragraph::new(lines)
                    .style(Style::default().fg(theme.fg))
                    .wrap(Wrap { trim: true }),
                chunks[1],
            );
        }
        SideView::Settings => {}
    }
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    placeholder: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused { theme.accent } else { theme.border };
    let text = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), Style::default().fg(theme.fg_muted))
    } else if focused {
        Span::styled(format!("{value}▏"), Style::default().fg(theme.fg))
    } else {
        Span::styled(value.to_string(), Style::default().fg(theme.fg))
    };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_explorer(app: &mut App, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let searching = app.focus == Focus::Explorer && app.explorer.search_focused;
    render_input(
        frame,
        chunks[0],
        "Search files",
        &app.explorer.query,
        searching,
        theme,
    );
    app.rects.search_input = chunks[0];
    frame.render_widget(
        Paragraph::new("FILES").style(
            Style::default()
                .fg(theme.fg_muted)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[1],
    );
    app.rects.tree = chunks[2];

    if app.explorer.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No matching files").style(Style::default().fg(theme.fg_muted)),
            chunks[2],
        );
        return;
    }
    let items: Vec<ListItem> = app
        .explorer
        .rows
        .iter()
        .map(|row| {
            let icon = Style::default().fg(icon_color(row.kind, row.extension.as_deref()));
            ListItem::new(Line::from(vec![
                Span::styled(row_prefix(row), icon),
                Span::styled(row.name.clone(), Style::default().fg(theme.fg)),
            ]))
        })
        .collect();
    let mut state = ListState::default()
        .with_offset(app.explorer.offset)
        .with_selected(Some(app.explorer.selected));
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_stateful_widget(list, chunks[2], &mut state);
    app.explorer.offset = state.offset();
}

pub(crate) fn render_editor(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    let focused = app.focus == Focus::Editor;
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", app.editor.tab_label),
            Style::default().fg(theme.fg).bg(theme.bg),
        ),
        Span::styled(
            if app.fullscreen { " [fullscreen] " } else { "" },
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    let run_hint = Line::from(Span::styled(
        format!(" ▶ Run {} ", app.keybinds.display_for(KeyAction::RunCode)),
        Style::default().fg(theme.accent),
    ))
    .right_aligned();
    let block = panel_block(&theme, focused).title(title).title(run_hint);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.rects.editor = area;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(&app.editor.textarea, chunks[0]);

    let (line, col) = app.cursor_position();
    let markers = &app.editor.markers;
    let issue_color = if markers.iter().any(|m| m.severity == Severity::Warning) {
        theme.warning
    } else if markers.is_empty() {
        theme.fg_muted
    } else {
        theme.info
    };
    let current = markers
        .iter()
        .find(|m| m.line == line)
        .map(|m| format!("  {} (col {}-{})", m.message, m.start_col, m.end_col))
        .unwrap_or_default();
    let footer = Line::from(vec![
        Span::styled(
            format!(" {} ", app.editor.language),
            Style::default().fg(theme.fg_muted),
        ),
        Span::styled(summary(markers), Style::default().fg(issue_color)),
        Span::styled(current, Style::default().fg(issue_color)),
        Span::styled(
            format!("  Ln {line}, Col {col}"),
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().bg(theme.bg_alt)),
        chunks[1],
    );
}

pub(crate) fn render_terminal(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    let focused = app.focus == Focus::Terminal;
    let title = if app.terminal.maximized {
        "TERMINAL [maximized]"
    } else {
        "TERMINAL"
    };
    let block = panel_block(&theme, focused).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.rects.terminal = area;

    let height = usize::from(inner.height);
    let cursor = if focused { "▏" } else { "" };
    let prompt = Line::from(vec![
        Span::styled("$ ", Style::default().fg(theme.accent)),
        Span::raw(format!("{}{cursor}", app.terminal.input)),
    ]);
    let scrollback = &app.terminal.scrollback;
    let keep = height.saturating_sub(1);
    let start = scrollback.len().saturating_sub(keep);
    let mut lines: Vec<Line> = scrollback[start..]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();
    lines.push(prompt);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.fg)),
        inner,
    );
}

pub(crate) fn render_assistant(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    let focused = app.focus == Focus::Assistant;
    let block = panel_block(&theme, focused).title("AI ASSISTANT");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.rects.assistant = area;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);
    let body = match app.assistant.response.as_deref() {
        Some(response) => Paragraph::new(response).style(Style::default().fg(theme.fg)),
        None => Paragraph::new("Ask me anything about your code.")
            .style(Style::default().fg(theme.fg_muted)),
    };
    frame.render_widget(body.wrap(Wrap { trim: true }), chunks[0]);

    let send = if app.assistant.is_loading() {
        "..."
    } else {
        "Send"
    };
    let cursor = if focused { "▏" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::raw(format!("{}{cursor}", app.assistant.prompt)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title_bottom(Line::from(format!("[{send}]")).right_aligned()),
    );
    frame.render_widget(input, chunks[1]);
}
