use super::App;

use crate::tree::{FileActivation, TreeRow, activate, visible_rows};
use crate::types::{ContextAction, SideView};

impl App {
    /// Rebuilds the flattened rows after the query or expansion changed.
    pub(crate) fn refresh_rows(&mut self) {
        self.explorer.rows = visible_rows(&self.tree, &self.expansion, &self.explorer.query);
        if self.explorer.selected >= self.explorer.rows.len() {
            self.explorer.selected = self.explorer.rows.len().saturating_sub(1);
        }
        self.explorer.offset = self.explorer.offset.min(self.explorer.selected);
    }

    #[cfg(test)]
    pub(crate) fn selected_row(&self) -> Option<&TreeRow> {
        self.explorer.rows.get(self.explorer.selected)
    }

    pub(crate) fn select_next_row(&mut self) {
        if self.explorer.selected + 1 < self.explorer.rows.len() {
            self.explorer.selected += 1;
        }
    }

    pub(crate) fn select_prev_row(&mut self) {
        self.explorer.selected = self.explorer.selected.saturating_sub(1);
    }

    pub(crate) fn activate_row(&mut self, index: usize) {
        let Some(id) = self.explorer.rows.get(index).map(|r| r.id.clone()) else {
            return;
        };
        self.explorer.selected = index;
        let Some(node) = self.tree.find(&id) else {
            return;
        };
        let mut activated: Option<FileActivation> = None;
        activate(node, &mut self.expansion, |file| activated = Some(file));
        match activated {
            Some(file) => self.open_activation(file),
            None => self.refresh_rows(),
        }
    }

    /// Opens or closes the selected folder. Already in that state, or a file: nothing.
    pub(crate) fn set_selected_expanded(&mut self, open: bool) {
        let Some(id) = self.explorer.rows.get(self.explorer.selected).map(|r| r.id.clone())
        else {
            return;
        };
        if self.expansion.is_expanded(&id) != open {
            self.expansion.toggle(&self.tree, &id);
            self.refresh_rows();
        }
    }

    pub(crate) fn activate_selected(&mut self) {
        self.activate_row(self.explorer.selected);
    }

    pub(crate) fn push_filter_char(&mut self, c: char) {
        self.explorer.query.push(c);
        self.refresh_rows();
    }

    pub(crate) fn pop_filter_char(&mut self) {
        self.explorer.query.pop();
        self.refresh_rows();
    }

    pub(crate) fn clear_filter(&mut self) {
        self.explorer.query.clear();
        self.explorer.search_focused = false;
        self.refresh_rows();
    }

    pub(crate) fn focus_filter(&mut self) {
        self.show_view(SideView::Explorer);
        self.explorer.search_focused = true;
    }

    pub(crate) fn tree_index_from_mouse(&self, y: u16) -> Option<usize> {
        let rect = self.rects.tree;
        if y < rect.y || y >= rect.y.saturating_add(rect.height) {
            return None;
        }
        let idx = self.explorer.offset + usize::from(y - rect.y);
        (idx < self.explorer.rows.len()).then_some(idx)
    }

    pub(crate) fn open_tree_context_menu_at(&mut self, column: u16, row: u16) {
        let Some(idx) = self.tree_index_from_mouse(row) else {
            return;
        };
        self.explorer.selected = idx;
        self.context_menu.target = Some(self.explorer.rows[idx].id.clone());
        self.context_menu.index = 0;
        self.context_menu.pos = (column, row);
        self.context_menu.open = true;
    }

    /// Tree editing is not supported; every entry just dismisses the menu.
    pub(crate) fn apply_context_action(&mut self, action: ContextAction) {
        tracing::debug!(
            action = action.label(),
            target = ?self.context_menu.target,
            "context menu action"
        );
        self.context_menu.open = false;
        self.context_menu.target = None;
    }
}
