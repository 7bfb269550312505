use super::App;
use std::io;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::keybinds::KeyScope;
use crate::types::Focus;
use crate::util::inside;

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> io::Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.context_menu.open {
            return self.handle_context_menu_key(key);
        }

        // Global keybind lookup
        if let Some(action) = self.keybinds.lookup(&key, KeyScope::Global) {
            return self.run_key_action(action);
        }

        // Non-remappable keys
        if (key.modifiers, key.code) == (KeyModifiers::NONE, KeyCode::Tab)
            && self.focus != Focus::Editor
        {
            self.cycle_focus();
            return Ok(());
        }

        match self.focus {
            Focus::Explorer => self.handle_side_panel_key(key),
            Focus::Editor => self.handle_editor_key(key),
            Focus::Terminal => self.handle_terminal_key(key),
            Focus::Assistant => self.handle_assistant_key(key),
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> io::Result<()> {
        if self.context_menu.open {
            return self.handle_context_menu_mouse(mouse);
        }

        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(view) = self
                    .rects
                    .activity
                    .iter()
                    .find(|(rect, _)| inside(x, y, *rect))
                    .map(|(_, view)| *view)
                {
                    self.show_view(view);
                } else if inside(x, y, self.rects.search_input) {
                    self.focus_filter();
                } else if inside(x, y, self.rects.tree) {
                    self.focus = Focus::Explorer;
                    self.explorer.search_focused = false;
                    if let Some(idx) = self.tree_index_from_mouse(y) {
                        self.activate_row(idx);
                    }
                } else if inside(x, y, self.rects.side) {
                    self.focus = Focus::Explorer;
                } else if inside(x, y, self.rects.editor) {
                    self.focus = Focus::Editor;
                } else if inside(x, y, self.rects.terminal) {
                    self.focus = Focus::Terminal;
                } else if inside(x, y, self.rects.assistant) {
                    self.focus = Focus::Assistant;
                } else if inside(x, y, self.rects.theme_label) {
                    self.next_theme();
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if inside(x, y, self.rects.tree) {
                    self.focus = Focus::Explorer;
                    self.open_tree_context_menu_at(x, y);
                }
            }
            MouseEventKind::ScrollDown if inside(x, y, self.rects.tree) => {
                self.select_next_row();
            }
            MouseEventKind::ScrollUp if inside(x, y, self.rects.tree) => {
                self.select_prev_row();
            }
            _ => {}
        }
        Ok(())
    }
}
