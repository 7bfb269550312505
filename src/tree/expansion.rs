use std::collections::HashSet;

use super::node::{FileTree, Node, NodeId};

/// Which folders are shown open. Kept beside the tree, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpansionState {
    expanded: HashSet<NodeId>,
}

impl ExpansionState {
    pub(crate) fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// `src` starts open, everything else collapsed.
    pub(crate) fn initial() -> Self {
        Self::with_expanded(["1"])
    }

    /// Flips a folder. Files and ids missing from `tree` leave the state alone.
    pub(crate) fn toggle(&mut self, tree: &FileTree, id: &NodeId) {
        if let Some(node) = tree.find(id) {
            self.toggle_node(node);
        }
    }

    pub(crate) fn toggle_node(&mut self, node: &Node) {
        let Node::Folder(folder) = node else {
            return;
        };
        if !self.expanded.remove(&folder.id) {
            self.expanded.insert(folder.id.clone());
        }
    }

    pub(crate) fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.expanded.len()
    }
}
