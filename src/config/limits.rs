/// Maximum number of entries (directories and files) a tree may hold.
pub const MAX_NODES: usize = 100;
/// Deepest nesting level accepted, top-level entries being depth 0.
pub const MAX_DEPTH: usize = 10;
/// Longest root-relative path, in bytes, a single entry may reconstruct to.
pub const MAX_PATH_LENGTH: usize = 255;
/// Spaces per level in indentation and bullet notation.
pub const INDENT_WIDTH: usize = 2;
/// Characters per level in tree-command notation (`├── `, `│   `).
pub const TREE_INDENT_WIDTH: usize = 4;
/// Names that are never created, wherever they appear in the tree.
pub const RESERVED_NAMES: &[&str] = &[".git"];

/// Structural limits the parser enforces.
///
/// Passed explicitly into [`crate::tree::Parser`] so that boundary values can be
/// exercised without touching shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    pub max_nodes: usize,
    pub max_depth: usize,
    pub max_path_length: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            max_depth: MAX_DEPTH,
            max_path_length: MAX_PATH_LENGTH,
        }
    }
}

impl ParseLimits {
    pub fn with_max_nodes(self, max_nodes: usize) -> Self {
        Self { max_nodes, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_max_path_length(self, max_path_length: usize) -> Self {
        Self {
            max_path_length,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_use_named_constants() {
        let limits = ParseLimits::default();
        assert_eq!(limits.max_nodes, 100);
        assert_eq!(limits.max_depth, 10);
        assert_eq!(limits.max_path_length, 255);
    }

    #[test]
    fn builders_only_change_their_own_field() {
        let limits = ParseLimits::default().with_max_depth(3).with_max_nodes(7);
        assert_eq!(limits.max_depth, 3);
        assert_eq!(limits.max_nodes, 7);
        assert_eq!(limits.max_path_length, MAX_PATH_LENGTH);
    }
}
