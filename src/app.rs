use arboard::Clipboard;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use ratatui_textarea::TextArea;

use crate::assistant::AssistantPanel;
use crate::diagnostics::Marker;
use crate::keybinds::KeyBindings;
use crate::persistence::SaveSlot;
use crate::terminal::TerminalSession;
use crate::theme::Theme;
use crate::tree::{ExpansionState, FileTree, NodeId, TreeRow};
use crate::types::{Focus, SideView};

mod core;
mod editor;
mod explorer;
mod input;
mod input_handlers;

pub(crate) struct ContextMenuState {
    pub(crate) open: bool,
    pub(crate) index: usize,
    pub(crate) target: Option<NodeId>,
    pub(crate) pos: (u16, u16),
    pub(crate) rect: Rect,
}

/// Explorer view state layered over the tree: filter text, flattened rows, cursor.
pub(crate) struct ExplorerState {
    pub(crate) query: String,
    pub(crate) search_focused: bool,
    pub(crate) rows: Vec<TreeRow>,
    pub(crate) selected: usize,
    /// First row shown, as scrolled by the last draw.
    pub(crate) offset: usize,
}

pub(crate) struct EditorState {
    pub(crate) tab_label: String,
    pub(crate) language: &'static str,
    pub(crate) textarea: TextArea<'static>,
    pub(crate) markers: Vec<Marker>,
}

/// Screen regions from the last draw, used for mouse hit-testing.
#[derive(Default)]
pub(crate) struct LayoutRects {
    pub(crate) activity: Vec<(Rect, SideView)>,
    pub(crate) side: Rect,
    pub(crate) search_input: Rect,
    pub(crate) tree: Rect,
    pub(crate) editor: Rect,
    pub(crate) terminal: Rect,
    pub(crate) assistant: Rect,
    pub(crate) theme_label: Rect,
}

pub(crate) struct App {
    pub(crate) tree: FileTree,
    pub(crate) expansion: ExpansionState,
    pub(crate) explorer: ExplorerState,
    pub(crate) side_view: SideView,
    pub(crate) focus: Focus,
    pub(crate) editor: EditorState,
    pub(crate) save_slot: SaveSlot,
    pub(crate) terminal: TerminalSession,
    pub(crate) assistant: AssistantPanel,
    pub(crate) themes: Vec<Theme>,
    pub(crate) active_theme_index: usize,
    pub(crate) fullscreen: bool,
    pub(crate) status: String,
    pub(crate) quit: bool,
    pub(crate) context_menu: ContextMenuState,
    pub(crate) rects: LayoutRects,
    pub(crate) keybinds: KeyBindings,
    pub(crate) clipboard: Option<Clipboard>,
    pub(crate) rng: StdRng,
}
