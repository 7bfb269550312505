use super::App;
use std::io;

use ratatui::style::{Modifier, Style};
use ratatui_textarea::TextArea;

use crate::diagnostics::{check_brackets, lint_lines};
use crate::documents::{language_for_extension, template_for_extension};
use crate::tree::FileActivation;
use crate::util::text_to_lines;

impl App {
    /// Editor side of a file activation: retitle the tab, maybe swap the body.
    pub(crate) fn open_activation(&mut self, file: FileActivation) {
        tracing::info!(
            id = %file.id,
            kind = ?file.kind,
            name = %file.name,
            "file activated"
        );
        let extension = file.extension.as_deref();
        self.editor.language = language_for_extension(extension);
        if let Some(text) = template_for_extension(extension) {
            self.replace_editor_text(text);
        }
        self.set_status(format!("Opened {}", file.name));
        self.editor.tab_label = file.name;
    }

    pub(crate) fn replace_editor_text(&mut self, text: &str) {
        self.editor.textarea = TextArea::from(text_to_lines(text));
        self.style_editor();
        self.on_editor_content_changed();
    }

    pub(crate) fn style_editor(&mut self) {
        let theme = self.active_theme().clone();
        let ta = &mut self.editor.textarea;
        ta.set_style(Style::default().fg(theme.fg).bg(theme.bg));
        ta.set_cursor_line_style(Style::default().bg(theme.bg_alt));
        ta.set_selection_style(Style::default().bg(theme.selection));
        ta.set_line_number_style(Style::default().fg(theme.fg_muted).bg(theme.bg));
        ta.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    pub(crate) fn on_editor_content_changed(&mut self) {
        self.editor.markers = lint_lines(self.editor.textarea.lines());
    }

    pub(crate) fn document_text(&self) -> String {
        self.editor.textarea.lines().join("\n")
    }

    /// 1-based line and column of the cursor.
    pub(crate) fn cursor_position(&self) -> (usize, usize) {
        let (row, col) = self.editor.textarea.cursor();
        (row + 1, col + 1)
    }

    pub(crate) fn save_document(&mut self) -> io::Result<()> {
        let text = self.document_text();
        self.save_slot.save(&text)?;
        self.set_status("Code saved successfully!");
        Ok(())
    }

    /// Dry run: nothing executes, only bracket structure is checked.
    pub(crate) fn run_document(&mut self) {
        match check_brackets(self.editor.textarea.lines()) {
            Ok(()) => self.set_status("Code executed successfully!"),
            Err(err) => {
                tracing::debug!(error = %err, "run rejected");
                self.set_status(format!("Error: {err}"));
            }
        }
    }

    pub(crate) fn copy_selection_to_clipboard(&mut self) {
        if self.editor.textarea.selection_range().is_none() {
            self.set_status("No selection to copy");
            return;
        }
        self.editor.textarea.copy();
        let copied = self.editor.textarea.yank_text();
        if copied.is_empty() {
            self.set_status("No selection to copy");
        } else if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(copied) {
                Ok(()) => self.set_status("Copied"),
                Err(_) => self.set_status("Copied (internal clipboard only)"),
            }
        } else {
            self.set_status("Copied (internal clipboard only)");
        }
    }

    pub(crate) fn cut_selection_to_clipboard(&mut self) {
        if self.editor.textarea.selection_range().is_none() {
            self.set_status("No selection to cut");
            return;
        }
        if self.editor.textarea.cut() {
            self.on_editor_content_changed();
        }
        let cut = self.editor.textarea.yank_text();
        if cut.is_empty() {
            self.set_status("No selection to cut");
        } else if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(cut) {
                Ok(()) => self.set_status("Cut"),
                Err(_) => self.set_status("Cut (internal clipboard only)"),
            }
        } else {
            self.set_status("Cut (internal clipboard only)");
        }
    }

    pub(crate) fn paste_from_clipboard(&mut self) {
        let mut from_system = false;
        if let Some(clipboard) = self.clipboard.as_mut()
            && let Ok(text) = clipboard.get_text()
            && !text.is_empty()
        {
            self.editor.textarea.set_yank_text(text);
            from_system = true;
        }
        if self.editor.textarea.paste() {
            self.on_editor_content_changed();
            self.set_status(if from_system {
                "Pasted"
            } else {
                "Pasted (internal clipboard)"
            });
        } else {
            self.set_status("Clipboard empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::KeyBindings;
    use crate::persistence::SaveSlot;
    use crate::tree::{NodeId, NodeKind};
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

    fn activation(id: &str, name: &str, ext: &str) -> FileActivation {
        FileActivation {
            id: NodeId::from(id),
            name: name.to_string(),
            kind: NodeKind::File,
            extension: Some(ext.to_string()),
        }
    }

    #[test]
    fn tsx_activation_keeps_document_and_renames_tab() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        let before = app.document_text();
        app.open_activation(activation("4", "Editor.tsx", "tsx"));
        assert_eq!(app.editor.tab_label, "Editor.tsx");
        assert_eq!(app.editor.language, "typescript");
        assert_eq!(app.document_text(), before);
    }

    #[test]
    fn markdown_activation_loads_readme_sample() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.open_activation(activation("12", "README.md", "md"));
        assert_eq!(app.editor.language, "markdown");
        assert_eq!(app.editor.textarea.lines()[0], "# CodeCraft Studio");
        assert_eq!(app.status, "Opened README.md");
    }

    #[test]
    fn markers_follow_document_changes() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        assert!(!app.editor.markers.is_empty());
        app.replace_editor_text("const a = 1;\n");
        assert!(app.editor.markers.is_empty());
        app.replace_editor_text("const a = 1\n");
        assert_eq!(app.editor.markers.len(), 1);
    }

    #[test]
    fn save_writes_whole_document_to_slot() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.replace_editor_text("line one;\nline two;");
        app.save_document().expect("save");
        assert_eq!(app.status, "Code saved successfully!");
        assert_eq!(
            app.save_slot.load().as_deref(),
            Some("line one;\nline two;")
        );
    }

    #[test]
    fn copy_without_selection_reports_status() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.copy_selection_to_clipboard();
        assert_eq!(app.status, "No selection to copy");
    }

    #[test]
    fn cut_and_paste_use_internal_buffer_without_clipboard() {
        let tmp = tempdir().expect("tempdir");
        let mut app = new_app(tmp.path());
        app.replace_editor_text("abc;");
        app.editor.textarea.select_all();
        app.cut_selection_to_clipboard();
        assert_eq!(app.document_text(), "");
        assert_eq!(app.status, "Cut (internal clipboard only)");
        app.paste_from_clipboard();
        assert_eq!(app.document_text(), "abc;");
        assert_eq!(app.status, "Pasted (internal clipboard)");
    }
}
