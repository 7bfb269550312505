use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;
use crate::tree::{NodeKind, TreeRow};

pub(crate) fn list_item_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    }
}

pub(crate) fn themed_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.bg_alt))
        .border_style(Style::default().fg(theme.accent))
}

/// Bordered panel whose border lights up while it has focus.
pub(crate) fn panel_block(theme: &Theme, focused: bool) -> Block<'static> {
    let border = if focused { theme.accent } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg_alt).fg(theme.fg))
}

pub(crate) fn icon_color(kind: NodeKind, extension: Option<&str>) -> Color {
    match (kind, extension) {
        (NodeKind::Folder, _) => Color::Rgb(220, 182, 122),
        (_, Some("tsx" | "ts")) => Color::Rgb(49, 120, 198),
        (_, Some("jsx" | "js")) => Color::Rgb(241, 224, 90),
        (_, Some("css")) => Color::Rgb(163, 113, 247),
        (_, Some("json")) => Color::Rgb(255, 229, 143),
        _ => Color::Rgb(150, 150, 150),
    }
}

/// Indent, chevron and icon preceding the row name.
pub(crate) fn row_prefix(row: &TreeRow) -> String {
    let indent = "  ".repeat(row.depth);
    match row.kind {
        NodeKind::Folder if row.expanded => format!("{indent}▾ ▪ "),
        NodeKind::Folder => format!("{indent}▸ ▪ "),
        NodeKind::File => format!("{indent}  ● "),
    }
}
