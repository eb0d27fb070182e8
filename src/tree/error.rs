use derive_more::Display;
use snafu::Snafu;

/// The rule a rejected line violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rule {
    #[display("invalid character")]
    InvalidCharacter,
    #[display("path traversal")]
    PathTraversal,
    #[display("absolute path")]
    AbsolutePath,
    #[display("name contains a space")]
    ContainsSpace,
    #[display("invalid indentation jump")]
    InvalidIndentationJump,
    #[display("misaligned indentation")]
    MisalignedIndentation,
    #[display("file cannot contain children")]
    FileWithChildren,
    #[display("bullet entries cannot be directories")]
    BulletDirectory,
    #[display("empty name")]
    EmptyName,
    #[display("name starts with a dash")]
    LeadingDash,
    #[display("reserved name")]
    ReservedName,
    #[display("too many nodes")]
    TooManyNodes,
    #[display("tree too deep")]
    TooDeep,
    #[display("path too long")]
    PathTooLong,
    #[display("no entries in input")]
    EmptyInput,
}

/// First violation found while parsing a tree.
///
/// Carries everything needed to render a diagnostic without re-scanning the input:
/// the violated rule, the 1-based line number and the raw text of that line.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("{rule}{}: '{text}'", at_line(line)))]
pub struct ParseError {
    pub rule: Rule,
    /// Absent only for [`Rule::EmptyInput`].
    pub line: Option<usize>,
    pub text: String,
}

impl ParseError {
    pub fn at(rule: Rule, line: usize, text: impl Into<String>) -> Self {
        Self {
            rule,
            line: Some(line),
            text: text.into(),
        }
    }

    pub fn empty_input() -> Self {
        Self {
            rule: Rule::EmptyInput,
            line: None,
            text: String::new(),
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}
