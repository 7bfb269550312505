#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Explorer,
    Editor,
    Terminal,
    Assistant,
}

/// Panel shown next to the activity bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SideView {
    Explorer,
    Search,
    SourceControl,
    RunDebug,
    Extensions,
    Settings,
}

impl SideView {
    pub(crate) fn title(self) -> &'static str {
        match self {
            SideView::Explorer => "EXPLORER",
            SideView::Search => "SEARCH",
            SideView::SourceControl => "SOURCE CONTROL",
            SideView::RunDebug => "RUN AND DEBUG",
            SideView::Extensions => "EXTENSIONS",
            SideView::Settings => "SETTINGS",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            SideView::Explorer => "⧉",
            SideView::Search => "⌕",
            SideView::SourceControl => "⑂",
            SideView::RunDebug => "▷",
            SideView::Extensions => "⊞",
            SideView::Settings => "⚙",
        }
    }
}

/// Explorer context menu entries. None of them mutate the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContextAction {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ContextAction {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ContextAction::NewFile => "New File",
            ContextAction::NewFolder => "New Folder",
            ContextAction::Rename => "Rename",
            ContextAction::Delete => "Delete",
        }
    }
}
