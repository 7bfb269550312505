mod helpers;
mod overlays;
mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::util::to_u16_saturating;
use overlays::render_context_menu;
use panels::{
    render_activity_bar, render_assistant, render_editor, render_side_panel, render_terminal,
};

const MENU_LABELS: [&str; 6] = ["File", "Edit", "View", "Run", "Terminal", "Help"];

pub(crate) fn draw(app: &mut App, frame: &mut Frame<'_>) {
    let size = frame.area();
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, vertical[0]);

    app.rects.activity.clear();
    app.rects.side = Rect::default();
    app.rects.search_input = Rect::default();
    app.rects.tree = Rect::default();
    app.rects.terminal = Rect::default();
    app.rects.assistant = Rect::default();

    let mut columns = Vec::new();
    if app.side_panel_visible() {
        columns.push(Constraint::Length(App::ACTIVITY_BAR_WIDTH));
        columns.push(Constraint::Length(App::SIDE_PANEL_WIDTH));
    }
    columns.push(Constraint::Min(20));
    if app.assistant.open {
        columns.push(Constraint::Length(App::ASSISTANT_WIDTH));
    }
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(vertical[1]);

    let mut next = 0;
    if app.side_panel_visible() {
        render_activity_bar(app, frame, main[0]);
        render_side_panel(app, frame, main[1]);
        next = 2;
    }
    let editor_column = main[next];
    if app.assistant.open {
        render_assistant(app, frame, main[next + 1]);
    }

    if app.terminal_visible() {
        let terminal_height = if app.terminal.maximized {
            Constraint::Percentage(75)
        } else {
            Constraint::Length(App::TERMINAL_HEIGHT)
        };
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), terminal_height])
            .split(editor_column);
        render_editor(app, frame, split[0]);
        render_terminal(app, frame, split[1]);
    } else {
        render_editor(app, frame, editor_column);
    }

    render_status_bar(app, frame, vertical[2]);

    if app.context_menu.open {
        render_context_menu(app, frame);
    }
}

fn render_title_bar(app: &mut App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme().clone();
    let mut spans = vec![Span::styled(
        " CodeCraft Studio ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for label in MENU_LABELS {
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme.fg_muted),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_alt)),
        area,
    );

    let label = format!(" ◐ {} ", theme.name);
    let width = to_u16_saturating(label.width()).min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(theme.fg).bg(theme.selection)),
        rect,
    );
    app.rects.theme_label = rect;
}

fn render_status_bar(app: &App, frame: &mut Frame<'_>, area: Rect) {
    let theme = app.active_theme();
    let style = Style::default().fg(Color::White).bg(theme.status_bg);
    let left = format!(" ⑂ main   TypeScript 5.5.3   Spaces: 2   {}", app.status);
    let right = "UTF-8   LF   ◉ Connected ";
    let right_width = to_u16_saturating(right.width());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);
    frame.render_widget(Paragraph::new(left).style(style), chunks[0]);
    frame.render_widget(Paragraph::new(right).style(style), chunks[1]);
}
