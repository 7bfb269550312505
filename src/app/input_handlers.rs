use super::App;
use std::io;
use std::time::Instant;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui_textarea::Input;

use crate::keybinds::{KeyAction, KeyScope};
use crate::types::{Focus, SideView};
use crate::util::{context_actions, inside};

fn is_text_input(key: &KeyEvent) -> bool {
    matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT)
}

impl App {
    pub(crate) fn handle_context_menu_key(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.context_menu.open = false;
            }
            KeyCode::Down => {
                if self.context_menu.index < context_actions().len().saturating_sub(1) {
                    self.context_menu.index += 1;
                }
            }
            KeyCode::Up => {
                self.context_menu.index = self.context_menu.index.saturating_sub(1);
            }
            KeyCode::Enter => {
                let action = context_actions()[self.context_menu.index];
                self.apply_context_action(action);
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn handle_context_menu_mouse(&mut self, mouse: MouseEvent) -> io::Result<()> {
        if !matches!(
            mouse.kind,
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Down(MouseButton::Right)
        ) {
            return Ok(());
        }
        let rect = self.context_menu.rect;
        if !inside(mouse.column, mouse.row, rect) {
            self.context_menu.open = false;
            return Ok(());
        }
        // Border rows hold no entry.
        if mouse.row <= rect.y {
            return Ok(());
        }
        let idx = usize::from(mouse.row - rect.y - 1);
        if let Some(action) = context_actions().get(idx).copied() {
            self.apply_context_action(action);
        }
        Ok(())
    }

    pub(crate) fn handle_side_panel_key(&mut self, key: KeyEvent) -> io::Result<()> {
        if self.side_view != SideView::Explorer {
            return Ok(());
        }
        if self.explorer.search_focused {
            return self.handle_filter_key(key);
        }
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down) => self.select_next_row(),
            (KeyModifiers::NONE, KeyCode::Up) => self.select_prev_row(),
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                self.activate_selected();
            }
            (KeyModifiers::NONE, KeyCode::Right) => self.set_selected_expanded(true),
            (KeyModifiers::NONE, KeyCode::Left) => self.set_selected_expanded(false),
            (KeyModifiers::NONE, KeyCode::Char('/')) => self.focus_filter(),
            (_, KeyCode::Esc) => self.clear_filter(),
            _ => {}
        }
        Ok(())
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Enter | KeyCode::Down => self.explorer.search_focused = false,
            KeyCode::Backspace => self.pop_filter_char(),
            KeyCode::Char(c) if is_text_input(&key) => self.push_filter_char(c),
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn handle_editor_key(&mut self, key: KeyEvent) -> io::Result<()> {
        if key.code == KeyCode::Esc {
            if self.side_panel_visible() {
                self.focus = Focus::Explorer;
            }
            return Ok(());
        }

        if let Some(action) = self.keybinds.lookup(&key, KeyScope::Editor) {
            return self.run_key_action(action);
        }

        if self.editor.textarea.input(Input::from(key)) {
            self.on_editor_content_changed();
        }
        Ok(())
    }

    pub(crate) fn handle_terminal_key(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Enter => self.terminal.submit(),
            KeyCode::Backspace => self.terminal.backspace(),
            KeyCode::Up => self.terminal.history_up(),
            KeyCode::Down => self.terminal.history_down(),
            KeyCode::Esc => self.focus = Focus::Editor,
            KeyCode::Char(c) if is_text_input(&key) => self.terminal.push_char(c),
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn handle_assistant_key(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Enter => {
                if !self.assistant.submit(Instant::now()) && self.assistant.is_loading() {
                    self.set_status("Assistant is still thinking");
                }
            }
            KeyCode::Backspace => {
                self.assistant.prompt.pop();
            }
            KeyCode::Esc => self.focus = Focus::Editor,
            KeyCode::Char(c) if is_text_input(&key) => self.assistant.prompt.push(c),
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn run_key_action(&mut self, action: KeyAction) -> io::Result<()> {
        match action {
            // Global
            KeyAction::Save => self.save_document()?,
            KeyAction::RunCode => self.run_document(),
            KeyAction::Quit => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            KeyAction::ToggleTerminal => self.toggle_terminal(),
            KeyAction::MaximizeTerminal => {
                if !self.terminal.open {
                    self.toggle_terminal();
                }
                self.terminal.toggle_maximized();
            }
            KeyAction::ToggleAssistant => self.toggle_assistant(),
            KeyAction::ToggleFullscreen => self.toggle_fullscreen(),
            KeyAction::NextTheme => self.next_theme(),
            KeyAction::SearchFiles => self.focus_filter(),
            KeyAction::ShowExplorer => self.show_view(SideView::Explorer),
            KeyAction::ShowSearch => self.show_view(SideView::Search),
            KeyAction::ShowSourceControl => self.show_view(SideView::SourceControl),
            KeyAction::ShowRunDebug => self.show_view(SideView::RunDebug),
            KeyAction::ShowExtensions => self.show_view(SideView::Extensions),
            KeyAction::ShowSettings => self.show_view(SideView::Settings),
            // Editor
            KeyAction::Undo => {
                if self.editor.textarea.undo() {
                    self.on_editor_content_changed();
                }
            }
            KeyAction::Redo => {
                if self.editor.textarea.redo() {
                    self.on_editor_content_changed();
                }
            }
            KeyAction::SelectAll => self.editor.textarea.select_all(),
            KeyAction::Copy => self.copy_selection_to_clipboard(),
            KeyAction::Cut => self.cut_selection_to_clipboard(),
            KeyAction::Paste => self.paste_from_clipboard(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::KeyBindings;
    use crate::persistence::SaveSlot;
    use ratatui::layout::Rect;
    use tempfile::tempdir;

    fn new_app(dir: &std::path::Path) -> App {
        let mut app = App::with_keybindings(
            SaveSlot::at(dir.join("storage.json")),
            KeyBindings::defaults(),
        )
        .expect("app");
        app.clipboard = None;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn non_explorer_views_ignore_tree_keys() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.show_view(SideView::SourceControl);
        app.handle_side_panel_key(key(KeyCode::Down)).expect("key");
        assert_eq!(app.explorer.selected, 0);
    }

    #[test]
    fn editor_typing_updates_markers_and_undo_restores() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.replace_editor_text("let a = 1;");
        app.editor.textarea.move_cursor(ratatui_textarea::CursorMove::End);
        app.handle_editor_key(key(KeyCode::Backspace)).expect("key");
        assert_eq!(app.document_text(), "let a = 1");
        assert_eq!(app.editor.markers.len(), 1);
        app.run_key_action(KeyAction::Undo).expect("undo");
        assert_eq!(app.document_text(), "let a = 1;");
        assert!(app.editor.markers.is_empty());
    }

    #[test]
    fn escape_in_editor_returns_to_explorer() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.focus = Focus::Editor;
        app.handle_editor_key(key(KeyCode::Esc)).expect("key");
        assert_eq!(app.focus, Focus::Explorer);
    }

    #[test]
    fn maximize_opens_terminal_first() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.run_key_action(KeyAction::MaximizeTerminal).expect("action");
        assert!(app.terminal.open);
        assert!(app.terminal.maximized);
    }

    #[test]
    fn assistant_reports_pending_request() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.assistant.prompt = "hi".to_string();
        app.handle_assistant_key(key(KeyCode::Enter)).expect("key");
        app.handle_assistant_key(key(KeyCode::Enter)).expect("key");
        assert_eq!(app.status, "Assistant is still thinking");
    }

    #[test]
    fn quit_action_sets_flag() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.run_key_action(KeyAction::Quit).expect("action");
        assert!(app.quit);
    }

    #[test]
    fn save_failure_propagates() {
        let tmp = tempdir().expect("tempdir");
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").expect("write");
        let mut app = App::with_keybindings(
            SaveSlot::at(blocker.join("storage.json")),
            KeyBindings::defaults(),
        )
        .expect("app");
        assert!(app.run_key_action(KeyAction::Save).is_err());
    }

    #[test]
    fn context_menu_click_outside_closes() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.context_menu.open = true;
        app.context_menu.rect = Rect::new(10, 10, 14, 6);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_context_menu_mouse(click).expect("mouse");
        assert!(!app.context_menu.open);
    }

    #[test]
    fn context_menu_border_click_applies_nothing() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.context_menu.open = true;
        app.context_menu.rect = Rect::new(10, 10, 14, 6);
        let click_at = |row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_context_menu_mouse(click_at(10)).expect("mouse");
        assert!(app.context_menu.open);
        app.handle_context_menu_mouse(click_at(11)).expect("mouse");
        assert!(!app.context_menu.open);
    }

    #[test]
    fn arrow_keys_expand_and_collapse_selected_folder() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        let src = crate::tree::NodeId::from("1");
        app.handle_side_panel_key(key(KeyCode::Left)).expect("key");
        assert!(!app.expansion.is_expanded(&src));
        app.handle_side_panel_key(key(KeyCode::Right)).expect("key");
        assert!(app.expansion.is_expanded(&src));
    }

    #[test]
    fn run_reports_success_or_bracket_error() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.run_key_action(KeyAction::RunCode).expect("run");
        assert_eq!(app.status, "Code executed successfully!");
        app.replace_editor_text("function f() {\n  return 1;\n");
        app.run_key_action(KeyAction::RunCode).expect("run");
        assert_eq!(app.status, "Error: Unexpected end of input");
        let f5 = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(
            app.keybinds.lookup(&f5, KeyScope::Global),
            Some(KeyAction::RunCode)
        );
    }
}

