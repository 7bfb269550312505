use std::collections::HashSet;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(String);

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) extension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FolderNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
}

/// One entry of the explorer hierarchy. Only folders carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    pub(crate) fn file(id: &str, name: &str, extension: &str) -> Self {
        let extension = (!extension.is_empty()).then(|| extension.to_string());
        Node::File(FileNode {
            id: NodeId::from(id),
            name: name.to_string(),
            extension,
        })
    }

    pub(crate) fn folder(id: &str, name: &str, children: Vec<Node>) -> Self {
        Node::Folder(FolderNode {
            id: NodeId::from(id),
            name: name.to_string(),
            children,
        })
    }

    pub(crate) fn id(&self) -> &NodeId {
        match self {
            Node::File(f) => &f.id,
            Node::Folder(f) => &f.id,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Folder(f) => &f.name,
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub(crate) fn extension(&self) -> Option<&str> {
        match self {
            Node::File(f) => f.extension.as_deref(),
            Node::Folder(_) => None,
        }
    }

    pub(crate) fn children(&self) -> &[Node] {
        match self {
            Node::File(_) => &[],
            Node::Folder(f) => &f.children,
        }
    }
}

/// Owner of the static explorer hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileTree {
    roots: Vec<Node>,
}

impl FileTree {
    /// Builds a tree, rejecting any identifier that appears twice.
    pub(crate) fn new(roots: Vec<Node>) -> io::Result<Self> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&Node> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            if !seen.insert(node.id().clone()) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duplicate node id: {}", node.id()),
                ));
            }
            stack.extend(node.children());
        }
        Ok(Self { roots })
    }

    /// The project shown by the explorer on startup.
    pub(crate) fn sample() -> Self {
        Self::new(vec![
            Node::folder(
                "1",
                "src",
                vec![
                    Node::folder(
                        "2",
                        "components",
                        vec![
                            Node::file("3", "App.tsx", "tsx"),
                            Node::file("4", "Editor.tsx", "tsx"),
                            Node::file("5", "FileExplorer.tsx", "tsx"),
                        ],
                    ),
                    Node::file("6", "main.tsx", "tsx"),
                    Node::file("7", "index.css", "css"),
                ],
            ),
            Node::folder("8", "public", vec![Node::file("9", "favicon.ico", "ico")]),
            Node::file("10", "package.json", "json"),
            Node::file("11", "tsconfig.json", "json"),
            Node::file("12", "README.md", "md"),
        ])
        .expect("sample tree ids are unique")
    }

    pub(crate) fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub(crate) fn find(&self, id: &NodeId) -> Option<&Node> {
        let mut stack: Vec<&Node> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children());
        }
        None
    }
}
