use tracing::debug;

use crate::config::ParseLimits;
use crate::tree::line::Line;
use crate::tree::node::{Node, NodeKind, SEPARATOR, Tree};
use crate::tree::{ParseError, Rule, rules};

/// Turns tree notation into a validated [`Tree`], stopping at the first violation.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    limits: ParseLimits,
}

impl Parser {
    pub fn new(limits: ParseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    pub fn parse(&self, input: &str) -> Result<Tree, ParseError> {
        let mut builder = TreeBuilder::new(self.limits);

        for (index, raw) in input.lines().enumerate() {
            let number = index + 1;
            let line = Line::scan(raw).map_err(|rule| ParseError::at(rule, number, raw))?;
            let Some(line) = line else {
                debug!("Skipping line {number} without an entry");
                continue;
            };
            builder
                .push(line, number)
                .map_err(|rule| ParseError::at(rule, number, raw))?;
        }

        let tree = builder.finish()?;
        debug!(
            "Parsed {} nodes, max depth {:?}",
            tree.len(),
            tree.max_depth()
        );
        Ok(tree)
    }
}

/// Builds the tree with an explicit stack of open directories, deepest on top.
///
/// A directory stays on the stack while lines may still nest under it; once a
/// line at the same or a shallower depth arrives it is popped and handed to its
/// parent, or to the root sequence.
struct TreeBuilder {
    limits: ParseLimits,
    roots: Vec<Node>,
    open: Vec<Node>,
    previous: Option<(NodeKind, usize)>,
    count: usize,
}

impl TreeBuilder {
    fn new(limits: ParseLimits) -> Self {
        Self {
            limits,
            roots: Vec::new(),
            open: Vec::new(),
            previous: None,
            count: 0,
        }
    }

    fn push(&mut self, line: Line<'_>, number: usize) -> Result<(), Rule> {
        self.check_nesting(line.depth)?;

        let name = rules::check_entry(line.entry)?;
        let kind = match (line.entry.ends_with(SEPARATOR), line.bullet) {
            (true, true) => return Err(Rule::BulletDirectory),
            (true, false) => NodeKind::Directory,
            (false, _) => NodeKind::File,
        };

        if line.depth > self.limits.max_depth {
            return Err(Rule::TooDeep);
        }
        if self.count >= self.limits.max_nodes {
            return Err(Rule::TooManyNodes);
        }

        self.close_to(line.depth);
        if self.path_length(name) > self.limits.max_path_length {
            return Err(Rule::PathTooLong);
        }

        self.count += 1;
        self.previous = Some((kind, line.depth));
        let node = Node {
            name: name.to_string(),
            kind,
            depth: line.depth,
            children: Vec::new(),
            comment: line.comment.map(str::to_string),
            line: number,
        };

        match kind {
            NodeKind::Directory => self.open.push(node),
            NodeKind::File => self.attach(node),
        }
        Ok(())
    }

    /// A line may sit at most one level below the innermost open directory.
    fn check_nesting(&self, depth: usize) -> Result<(), Rule> {
        if depth <= self.open.len() {
            return Ok(());
        }
        match self.previous {
            Some((NodeKind::File, previous_depth)) if depth > previous_depth => {
                Err(Rule::FileWithChildren)
            }
            _ => Err(Rule::InvalidIndentationJump),
        }
    }

    fn path_length(&self, name: &str) -> usize {
        self.open
            .iter()
            .map(|ancestor| ancestor.name.len() + SEPARATOR.len_utf8())
            .sum::<usize>()
            + name.len()
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(node) = self.open.pop() {
                self.attach(node);
            }
        }
    }

    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Result<Tree, ParseError> {
        self.close_to(0);
        if self.roots.is_empty() {
            return Err(ParseError::empty_input());
        }
        Ok(Tree::new(self.roots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn parse(input: &str) -> Result<Tree, ParseError> {
        Parser::default().parse(input)
    }

    fn paths(tree: &Tree) -> Vec<String> {
        tree.iter().map(|(path, _)| path).collect()
    }

    fn nested_directories(levels: usize) -> String {
        (0..levels)
            .map(|depth| format!("{}d{depth}/\n", "  ".repeat(depth)))
            .collect()
    }

    #[test]
    fn builds_mixed_indentation_and_bullets() {
        let input = "project/\n  src/\n    - main.py\n  docs/\n    - README.md";
        let tree = parse(input).expect("valid tree");

        assert_eq!(tree.roots().len(), 1);
        let project = &tree.roots()[0];
        assert_eq!(project.name, "project");
        assert!(project.is_directory());
        assert_eq!(project.children.len(), 2);
        assert_eq!(project.children[0].children[0].kind, NodeKind::File);
        assert_eq!(project.children[1].children[0].line, 5);
        assert_eq!(
            paths(&tree),
            vec![
                "project",
                "project/src",
                "project/src/main.py",
                "project/docs",
                "project/docs/README.md",
            ]
        );
    }

    #[test]
    fn dedent_returns_to_the_right_ancestor() {
        let input = "a/\n  b/\n    c/\n      deep.txt\n  sibling.txt\ntop.txt";
        let tree = parse(input).expect("valid tree");
        assert_eq!(
            paths(&tree),
            vec!["a", "a/b", "a/b/c", "a/b/c/deep.txt", "a/sibling.txt", "top.txt"]
        );
        assert_eq!(tree.max_depth(), Some(3));
    }

    #[test]
    fn parses_tree_command_output_with_comments() {
        let input = "\
python_package/
├── src/
│   ├── __init__.py
│   └── core/
│       └── main.py        # Core functionality
└── README.md             # Project documentation";
        let tree = parse(input).expect("valid tree");

        assert_eq!(
            paths(&tree),
            vec![
                "python_package",
                "python_package/src",
                "python_package/src/__init__.py",
                "python_package/src/core",
                "python_package/src/core/main.py",
                "python_package/README.md",
            ]
        );
        let main = tree
            .iter()
            .find(|(_, node)| node.name == "main.py")
            .map(|(_, node)| node)
            .expect("main.py present");
        assert_eq!(main.comment.as_deref(), Some("Core functionality"));
    }

    #[test]
    fn blank_lines_are_skipped_but_keep_line_numbers() {
        let error = parse("a/\n\n\n  b c").unwrap_err();
        assert_eq!(error.rule, Rule::ContainsSpace);
        assert_eq!(error.line, Some(4));
        assert_eq!(error.text, "  b c");
    }

    #[rstest]
    #[case("")]
    #[case("   \n  \n")]
    #[case("# only a comment\n│")]
    fn empty_input_is_an_error(#[case] input: &str) {
        assert_eq!(parse(input), Err(ParseError::empty_input()));
    }

    #[test]
    fn traversal_in_a_single_line() {
        let error = parse("a/../b").unwrap_err();
        assert_eq!(error.rule, Rule::PathTraversal);
        assert_eq!(error.line, Some(1));
        assert_eq!(error.text, "a/../b");
    }

    #[test]
    fn two_level_jump_is_rejected() {
        let error = parse("a/\n    b/").unwrap_err();
        assert_eq!(error.rule, Rule::InvalidIndentationJump);
        assert_eq!(error.line, Some(2));
    }

    #[test]
    fn first_line_must_be_top_level() {
        let error = parse("  a/").unwrap_err();
        assert_eq!(error.rule, Rule::InvalidIndentationJump);
        assert_eq!(error.line, Some(1));
    }

    #[rstest]
    #[case("notes.txt\n  child.txt")]
    #[case("dir/\n  - file.py\n    nested/")]
    #[case("README\n      far.txt")]
    fn files_cannot_have_children(#[case] input: &str) {
        assert_eq!(parse(input).unwrap_err().rule, Rule::FileWithChildren);
    }

    #[rstest]
    #[case("project/\n  ../outside/\n    - hack.py", Rule::PathTraversal, 2)]
    #[case("project/\n  /etc/\n    - config.txt", Rule::AbsolutePath, 2)]
    #[case("project/\n  my file.txt", Rule::ContainsSpace, 2)]
    #[case("project/\n  file*.txt", Rule::InvalidCharacter, 2)]
    #[case("project/\n  $HOME/", Rule::InvalidCharacter, 2)]
    #[case("project/\n  - src/", Rule::BulletDirectory, 2)]
    #[case("project/\n  - ", Rule::EmptyName, 2)]
    #[case("project/\n  .git/\n    config", Rule::ReservedName, 2)]
    #[case("-rf/", Rule::LeadingDash, 1)]
    #[case("a/\n   b.txt", Rule::MisalignedIndentation, 2)]
    fn unsafe_entries_are_rejected(#[case] input: &str, #[case] rule: Rule, #[case] line: usize) {
        let error = parse(input).unwrap_err();
        assert_eq!(error.rule, rule);
        assert_eq!(error.line, Some(line));
    }

    #[test]
    fn first_violation_wins() {
        let error = parse("ok/\n  bad$/\n  ../\n").unwrap_err();
        assert_eq!(error.rule, Rule::InvalidCharacter);
        assert_eq!(error.line, Some(2));
    }

    #[test]
    fn exactly_max_nodes_is_accepted() {
        let input: String = (0..100).map(|i| format!("file{i}.txt\n")).collect();
        assert_eq!(parse(&input).expect("100 nodes fit").len(), 100);
    }

    #[test]
    fn one_node_over_the_limit_is_rejected() {
        let input: String = (0..101).map(|i| format!("file{i}.txt\n")).collect();
        let error = parse(&input).unwrap_err();
        assert_eq!(error.rule, Rule::TooManyNodes);
        assert_eq!(error.line, Some(101));
        assert_eq!(error.text, "file100.txt");
    }

    #[test]
    fn depth_ten_is_accepted() {
        let tree = parse(&nested_directories(11)).expect("depth 10 fits");
        assert_eq!(tree.max_depth(), Some(10));
    }

    #[test]
    fn depth_eleven_is_too_deep() {
        let error = parse(&nested_directories(12)).unwrap_err();
        assert_eq!(error.rule, Rule::TooDeep);
        assert_eq!(error.line, Some(12));
    }

    #[test]
    fn limits_are_taken_from_the_parser() {
        let parser = Parser::new(ParseLimits::default().with_max_nodes(2).with_max_depth(1));

        assert!(parser.parse("a/\n  b.txt").is_ok());
        assert_eq!(
            parser.parse("a/\n  b.txt\nc.txt").unwrap_err().rule,
            Rule::TooManyNodes
        );
        assert_eq!(
            parser.parse("a/\n  b/\n    c.txt").unwrap_err().rule,
            Rule::TooDeep
        );
    }

    #[test]
    fn path_length_counts_ancestors() {
        let parser = Parser::new(ParseLimits::default().with_max_path_length(11));

        assert!(parser.parse("abcd/\n  efgh.x").is_ok());
        let error = parser.parse("abcd/\n  efgh.xy").unwrap_err();
        assert_eq!(error.rule, Rule::PathTooLong);
        assert_eq!(error.line, Some(2));
    }

    #[test]
    fn duplicate_directories_stay_separate_nodes() {
        let tree = parse("project/\n  src/\n    - a.py\n  src/\n    - b.py").expect("valid");
        assert_eq!(tree.len(), 5);
    }
}
