use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem};

use crate::app::App;
use crate::util::{context_actions, to_u16_saturating};

use super::helpers::{list_item_style, themed_block};

pub(crate) fn render_context_menu(app: &mut App, frame: &mut Frame<'_>) {
    let theme = app.active_theme().clone();
    let width = 24;
    let height = to_u16_saturating(context_actions().len()) + 2;
    let max_x = frame.area().width.saturating_sub(width);
    let max_y = frame.area().height.saturating_sub(height);
    let x = app.context_menu.pos.0.min(max_x);
    let y = app.context_menu.pos.1.min(max_y);
    let area = Rect::new(x, y, width, height);
    app.context_menu.rect = area;
    frame.render_widget(Clear, area);
    let list_items: Vec<ListItem> = context_actions()
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = list_item_style(idx == app.context_menu.index, &theme);
            ListItem::new(Line::from(Span::styled(action.label(), style)))
        })
        .collect();
    let title = app
        .context_menu
        .target
        .as_ref()
        .and_then(|id| app.tree.find(id))
        .map(|node| node.name().to_string())
        .unwrap_or_else(|| "Actions".to_string());
    let list = List::new(list_items).block(themed_block(&theme).title(title));
    frame.render_widget(list, area);
}
