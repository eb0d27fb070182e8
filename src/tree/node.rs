use derive_more::Display;

/// Path separator used in reconstructed paths, regardless of platform.
pub const SEPARATOR: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// One entry of the parsed tree.
///
/// Children are owned by their parent; a file never has any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub children: Vec<Node>,
    /// Inline `# ...` comment stripped from the source line.
    pub comment: Option<String>,
    /// 1-based line the node was read from.
    pub line: usize,
}

impl Node {
    pub fn directory(name: impl Into<String>, depth: usize) -> Self {
        Self::new(name, NodeKind::Directory, depth)
    }

    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Self::new(name, NodeKind::File, depth)
    }

    fn new(name: impl Into<String>, kind: NodeKind, depth: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            depth,
            children: Vec::new(),
            comment: None,
            line: 0,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// The implicit root: the top-level entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.iter().map(|(_, node)| node.depth).max()
    }

    /// Pre-order walk yielding every node with its `/`-joined root-relative path.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().map(|node| (None, node)).collect(),
        }
    }
}

pub struct PreOrder<'a> {
    stack: Vec<(Option<String>, &'a Node)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (String, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (parent, node) = self.stack.pop()?;
        let path = join_path(parent.as_deref(), &node.name);
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (Some(path.clone()), child)),
        );
        Some((path, node))
    }
}

fn join_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{SEPARATOR}{name}"),
        None => name.to_string(),
    }
}
