use ratatui::layout::Rect;

use crate::types::{ContextAction, SideView};

pub(crate) fn text_to_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut lines: Vec<String> = text.lines().map(ToString::to_string).collect();
    if text.ends_with('\n') {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub(crate) fn context_actions() -> [ContextAction; 4] {
    [
        ContextAction::NewFile,
        ContextAction::NewFolder,
        ContextAction::Rename,
        ContextAction::Delete,
    ]
}

pub(crate) fn side_views() -> [SideView; 6] {
    [
        SideView::Explorer,
        SideView::Search,
        SideView::SourceControl,
        SideView::RunDebug,
        SideView::Extensions,
        SideView::Settings,
    ]
}

pub(crate) fn inside(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

pub(crate) fn to_u16_saturating(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_lines_keeps_trailing_empty_line() {
        assert_eq!(text_to_lines(""), vec![String::new()]);
        assert_eq!(text_to_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(text_to_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn inside_excludes_far_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(inside(2, 3, rect));
        assert!(inside(5, 4, rect));
        assert!(!inside(6, 4, rect));
        assert!(!inside(5, 5, rect));
        assert!(!inside(1, 3, rect));
    }

    #[test]
    fn to_u16_saturating_clamps() {
        assert_eq!(to_u16_saturating(7), 7);
        assert_eq!(to_u16_saturating(usize::MAX), u16::MAX);
    }
}
