//! Explorer model: the static node hierarchy plus the view-side annotations
//! (expanded folders, search query) that decide what the explorer shows.

mod expansion;
mod filter;
mod node;

pub(crate) use expansion::ExpansionState;
pub(crate) use filter::filter_nodes;
pub(crate) use node::{FileTree, Node, NodeId, NodeKind};

/// Identity handed to the editor when a file is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileActivation {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) extension: Option<String>,
}

/// Files notify `on_file`; folders toggle their expansion. Never both.
pub(crate) fn activate<F>(node: &Node, expansion: &mut ExpansionState, on_file: F)
where
    F: FnOnce(FileActivation),
{
    match node {
        Node::File(file) => on_file(FileActivation {
            id: file.id.clone(),
            name: file.name.clone(),
            kind: NodeKind::File,
            extension: file.extension.clone(),
        }),
        Node::Folder(_) => expansion.toggle_node(node),
    }
}

/// A single rendered explorer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TreeRow {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) extension: Option<String>,
    pub(crate) depth: usize,
    pub(crate) expanded: bool,
}

/// Flattens the filtered tree, descending only into expanded folders.
pub(crate) fn visible_rows(
    tree: &FileTree,
    expansion: &ExpansionState,
    query: &str,
) -> Vec<TreeRow> {
    let filtered = filter_nodes(tree.roots(), query);
    let mut out = Vec::new();
    push_rows(&filtered, expansion, 0, &mut out);
    out
}

fn push_rows(
    nodes: &[Node],
    expansion: &ExpansionState,
    depth: usize,
    out: &mut Vec<TreeRow>,
) {
    for node in nodes {
        let expanded = node.kind() == NodeKind::Folder && expansion.is_expanded(node.id());
        out.push(TreeRow {
            id: node.id().clone(),
            name: node.name().to_string(),
            kind: node.kind(),
            extension: node.extension().map(str::to_string),
            depth,
            expanded,
        });
        if expanded {
            push_rows(node.children(), expansion, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_names(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn activating_file_notifies_once_without_touching_expansion() {
        let tree = FileTree::sample();
        let mut expansion = ExpansionState::initial();
        let before = expansion.clone();
        let node = tree.find(&NodeId::from("4")).expect("Editor.tsx");
        let mut seen = Vec::new();
        activate(node, &mut expansion, |file| seen.push(file));
        assert_eq!(
            seen,
            vec![FileActivation {
                id: NodeId::from("4"),
                name: "Editor.tsx".to_string(),
                kind: NodeKind::File,
                extension: Some("tsx".to_string()),
            }]
        );
        assert_eq!(expansion, before);
    }

    #[test]
    fn activating_folder_toggles_only_that_folder() {
        let tree = FileTree::sample();
        let mut expansion = ExpansionState::initial();
        let node = tree.find(&NodeId::from("8")).expect("public");
        let mut calls = 0;
        activate(node, &mut expansion, |_| calls += 1);
        assert_eq!(calls, 0);
        assert!(expansion.is_expanded(&NodeId::from("8")));
        assert!(expansion.is_expanded(&NodeId::from("1")));
        assert_eq!(expansion.len(), 2);
    }

    #[test]
    fn initial_rows_show_src_contents_only() {
        let rows = visible_rows(&FileTree::sample(), &ExpansionState::initial(), "");
        assert_eq!(
            row_names(&rows),
            vec![
                "src",
                "components",
                "main.tsx",
                "index.css",
                "public",
                "package.json",
                "tsconfig.json",
                "README.md",
            ]
        );
        assert_eq!(rows[1].depth, 1);
        assert!(rows[0].expanded);
        assert!(!rows[1].expanded);
    }

    #[test]
    fn collapsed_folder_hides_filtered_children() {
        let tree = FileTree::sample();
        let mut expansion = ExpansionState::initial();
        let rows = visible_rows(&tree, &expansion, "main");
        assert_eq!(row_names(&rows), vec!["src", "main.tsx"]);
        expansion.toggle(&tree, &NodeId::from("1"));
        let rows = visible_rows(&tree, &expansion, "main");
        assert_eq!(row_names(&rows), vec!["src"]);
    }
}
