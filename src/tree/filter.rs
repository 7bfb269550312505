use super::node::{FolderNode, Node};

fn name_contains(name: &str, query_lower: &str) -> bool {
    name.to_lowercase().contains(query_lower)
}

/// A node survives a non-empty query when its own name matches, or when it is a
/// folder with a direct child whose name matches. Grandchildren are not
/// consulted.
pub(crate) fn node_matches(node: &Node, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query_lower = query.to_lowercase();
    if name_contains(node.name(), &query_lower) {
        return true;
    }
    match node {
        Node::Folder(folder) => folder
            .children
            .iter()
            .any(|child| name_contains(child.name(), &query_lower)),
        Node::File(_) => false,
    }
}

/// Applies the match rule level by level, keeping original sibling order.
pub(crate) fn filter_nodes(nodes: &[Node], query: &str) -> Vec<Node> {
    if query.is_empty() {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .filter(|node| node_matches(node, query))
        .map(|node| match node {
            Node::File(_) => node.clone(),
            Node::Folder(folder) => Node::Folder(FolderNode {
                id: folder.id.clone(),
                name: folder.name.clone(),
                children: filter_nodes(&folder.children, query),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{FileNode, FileTree, NodeId};
    use proptest::prelude::*;

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::name).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let tree = FileTree::sample();
        assert_eq!(filter_nodes(tree.roots(), ""), tree.roots().to_vec());
    }

    #[test]
    fn folder_with_matching_child_is_retained() {
        let tree = FileTree::sample();
        let src = &tree.roots()[0];
        let kept = filter_nodes(src.children(), "App");
        assert_eq!(names(&kept), vec!["components"]);
        assert_eq!(names(kept[0].children()), vec!["App.tsx"]);
    }

    #[test]
    fn deep_match_does_not_promote_grandparent() {
        let tree = FileTree::sample();
        let src = &tree.roots()[0];
        assert!(!node_matches(src, "App"));
        assert!(node_matches(&src.children()[0], "App"));
        let top = filter_nodes(tree.roots(), "App");
        assert!(top.iter().all(|n| n.name() != "src"));
        assert!(top.is_empty());
    }

    #[test]
    fn direct_child_match_keeps_parent_and_prunes_siblings() {
        let tree = FileTree::sample();
        let top = filter_nodes(tree.roots(), "main");
        assert_eq!(names(&top), vec!["src"]);
        assert_eq!(names(top[0].children()), vec!["main.tsx"]);
    }

    #[test]
    fn own_name_match_keeps_folder_even_if_children_do_not() {
        let tree = FileTree::sample();
        let top = filter_nodes(tree.roots(), "pub");
        assert_eq!(names(&top), vec!["public"]);
        assert!(top[0].children().is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let tree = FileTree::sample();
        let top = filter_nodes(tree.roots(), "json");
        assert_eq!(names(&top), vec!["package.json", "tsconfig.json"]);
    }

    #[derive(Debug, Clone)]
    enum Shape {
        File(String),
        Folder(String, Vec<Shape>),
    }

    // A small alphabet so random queries hit names at every depth.
    fn shape() -> impl Strategy<Value = Shape> {
        let leaf = "[a-cA-C]{1,4}(\\.(ts|md))?".prop_map(Shape::File);
        leaf.prop_recursive(4, 32, 4, |inner| {
            ("[a-cA-C]{1,4}", prop::collection::vec(inner, 0..4))
                .prop_map(|(name, children)| Shape::Folder(name, children))
        })
    }

    fn build(shapes: Vec<Shape>, next_id: &mut usize) -> Vec<Node> {
        shapes
            .into_iter()
            .map(|shape| {
                *next_id += 1;
                let id = NodeId::from(next_id.to_string().as_str());
                match shape {
                    Shape::File(name) => Node::File(FileNode {
                        id,
                        extension: name.rsplit_once('.').map(|(_, ext)| ext.to_string()),
                        name,
                    }),
                    Shape::Folder(name, children) => Node::Folder(FolderNode {
                        id,
                        name,
                        children: build(children, next_id),
                    }),
                }
            })
            .collect()
    }

    fn any_tree() -> impl Strategy<Value = FileTree> {
        prop::collection::vec(shape(), 0..5).prop_map(|shapes| {
            let mut next_id = 0;
            FileTree::new(build(shapes, &mut next_id)).expect("generated ids are unique")
        })
    }

    /// Each level keeps exactly the matching originals, in order, and recurses.
    fn level_follows_shallow_rule(original: &[Node], filtered: &[Node], query: &str) -> bool {
        let expected: Vec<&Node> = original.iter().filter(|n| node_matches(n, query)).collect();
        expected.len() == filtered.len()
            && expected.iter().zip(filtered).all(|(orig, kept)| {
                orig.id() == kept.id()
                    && orig.name() == kept.name()
                    && level_follows_shallow_rule(orig.children(), kept.children(), query)
            })
    }

    proptest! {
        #[test]
        fn empty_query_keeps_any_tree(tree in any_tree()) {
            prop_assert_eq!(filter_nodes(tree.roots(), ""), tree.roots().to_vec());
        }

        #[test]
        fn filter_ignores_query_case(tree in any_tree(), query in "[a-cA-C.]{0,3}") {
            let upper = filter_nodes(tree.roots(), &query.to_uppercase());
            let lower = filter_nodes(tree.roots(), &query.to_lowercase());
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn every_level_keeps_matching_nodes_in_order(
            tree in any_tree(),
            query in "[a-cA-C]{1,2}",
        ) {
            let filtered = filter_nodes(tree.roots(), &query);
            prop_assert!(level_follows_shallow_rule(tree.roots(), &filtered, &query));
        }

        #[test]
        fn filtering_twice_changes_nothing(tree in any_tree(), query in "[a-cA-C]{1,2}") {
            let once = filter_nodes(tree.roots(), &query);
            prop_assert_eq!(filter_nodes(&once, &query), once);
        }
    }
}
