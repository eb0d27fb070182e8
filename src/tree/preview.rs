use crate::tree::node::{Node, SEPARATOR, Tree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// Renders a tree in the box-drawing layout of the `tree` command.
///
/// The output is itself valid input for [`crate::tree::Parser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePreview {
    include_comments: bool,
}

impl TreePreview {
    pub fn new(include_comments: bool) -> Self {
        Self { include_comments }
    }

    pub fn render(&self, tree: &Tree) -> String {
        let mut lines = Vec::with_capacity(tree.len());
        for root in tree.roots() {
            lines.push(self.label(root));
            self.render_children(&root.children, "", &mut lines);
        }
        lines.join("\n")
    }

    fn render_children(&self, children: &[Node], prefix: &str, lines: &mut Vec<String>) {
        for (index, child) in children.iter().enumerate() {
            let last = index + 1 == children.len();
            let connector = if last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{prefix}{connector}{}", self.label(child)));

            let nested = format!("{prefix}{}", if last { GAP } else { PIPE });
            self.render_children(&child.children, &nested, lines);
        }
    }

    fn label(&self, node: &Node) -> String {
        let mut label = node.name.clone();
        if node.is_directory() {
            label.push(SEPARATOR);
        }
        if let Some(comment) = node.comment.as_deref().filter(|_| self.include_comments) {
            label.push_str("  # ");
            label.push_str(comment);
        }
        label
    }
}
