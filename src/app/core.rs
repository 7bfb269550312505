use super::{App, ContextMenuState, EditorState, ExplorerState, LayoutRects};
use std::io;
use std::time::Instant;

use arboard::Clipboard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use ratatui_textarea::TextArea;

use crate::assistant::AssistantPanel;
use crate::documents::{WELCOME_TAB, WELCOME_TSX, language_for_extension};
use crate::keybinds::{KeyAction, KeyBindings, load_keybindings};
use crate::persistence::SaveSlot;
use crate::terminal::TerminalSession;
use crate::theme::{Theme, load_themes};
use crate::tree::{ExpansionState, FileTree, visible_rows};
use crate::types::{Focus, SideView};
use crate::util::text_to_lines;

impl App {
    pub(crate) const ACTIVITY_BAR_WIDTH: u16 = 4;
    pub(crate) const SIDE_PANEL_WIDTH: u16 = 30;
    pub(crate) const ASSISTANT_WIDTH: u16 = 38;
    pub(crate) const TERMINAL_HEIGHT: u16 = 10;

    pub(crate) fn new(save_slot: SaveSlot) -> io::Result<Self> {
        Self::with_keybindings(save_slot, load_keybindings())
    }

    pub(crate) fn with_keybindings(
        save_slot: SaveSlot,
        keybinds: KeyBindings,
    ) -> io::Result<Self> {
        let themes = load_themes();
        if themes.is_empty() {
            return Err(io::Error::other("no themes available"));
        }
        let tree = FileTree::sample();
        let expansion = ExpansionState::initial();
        let rows = visible_rows(&tree, &expansion, "");
        let mut app = Self {
            tree,
            expansion,
            explorer: ExplorerState {
                query: String::new(),
                search_focused: false,
                rows,
                selected: 0,
                offset: 0,
            },
            side_view: SideView::Explorer,
            focus: Focus::Explorer,
            editor: EditorState {
                tab_label: WELCOME_TAB.to_string(),
                language: language_for_extension(Some("tsx")),
                textarea: TextArea::from(text_to_lines(WELCOME_TSX)),
                markers: Vec::new(),
            },
            save_slot,
            terminal: TerminalSession::default(),
            assistant: AssistantPanel::default(),
            themes,
            active_theme_index: 0,
            fullscreen: false,
            status: String::new(),
            quit: false,
            context_menu: ContextMenuState {
                open: false,
                index: 0,
                target: None,
                pos: (0, 0),
                rect: Rect::default(),
            },
            rects: LayoutRects::default(),
            keybinds,
            clipboard: Clipboard::new().ok(),
            rng: StdRng::from_entropy(),
        };
        app.style_editor();
        app.on_editor_content_changed();
        app.status = format!(
            "Ready. {} saves, {} quits",
            app.keybinds.display_for(KeyAction::Save),
            app.keybinds.display_for(KeyAction::Quit),
        );
        tracing::info!(theme = %app.active_theme().name, "workspace ready");
        Ok(app)
    }

    pub(crate) fn active_theme(&self) -> &Theme {
        &self.themes[self.active_theme_index]
    }

    pub(crate) fn set_status<S: Into<String>>(&mut self, status: S) {
        self.status = status.into();
    }

    pub(crate) fn next_theme(&mut self) {
        self.active_theme_index = (self.active_theme_index + 1) % self.themes.len();
        self.style_editor();
        let name = self.active_theme().name.clone();
        tracing::debug!(theme = %name, "theme changed");
        self.set_status(format!("Theme: {name}"));
    }

    /// Resolves time-based work; returns true when something changed on screen.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        self.assistant.poll(now, &mut self.rng)
    }

    pub(crate) fn side_panel_visible(&self) -> bool {
        !self.fullscreen
    }

    pub(crate) fn terminal_visible(&self) -> bool {
        self.terminal.open && !self.fullscreen
    }

    pub(crate) fn show_view(&mut self, view: SideView) {
        self.side_view = view;
        self.fullscreen = false;
        self.focus = Focus::Explorer;
        self.explorer.search_focused = false;
    }

    pub(crate) fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        if self.fullscreen && matches!(self.focus, Focus::Explorer | Focus::Terminal) {
            self.focus = Focus::Editor;
        }
        self.set_status(if self.fullscreen {
            "Fullscreen on"
        } else {
            "Fullscreen off"
        });
    }

    pub(crate) fn toggle_terminal(&mut self) {
        self.terminal.toggle_open();
        if self.terminal.open {
            self.focus = Focus::Terminal;
        } else if self.focus == Focus::Terminal {
            self.focus = Focus::Editor;
        }
    }

    pub(crate) fn toggle_assistant(&mut self) {
        self.assistant.toggle();
        if self.assistant.open {
            self.focus = Focus::Assistant;
        } else if self.focus == Focus::Assistant {
            self.focus = Focus::Editor;
        }
    }

    /// Next focusable pane among those currently on screen.
    pub(crate) fn cycle_focus(&mut self) {
        let order = [
            Focus::Explorer,
            Focus::Editor,
            Focus::Terminal,
            Focus::Assistant,
        ];
        let start = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for step in 1..=order.len() {
            let candidate = order[(start + step) % order.len()];
            let visible = match candidate {
                Focus::Explorer => self.side_panel_visible(),
                Focus::Editor => true,
                Focus::Terminal => self.terminal_visible(),
                Focus::Assistant => self.assistant.open,
            };
            if visible {
                self.focus = candidate;
                break;
            }
        }
        self.explorer.search_focused = false;
    }
}
