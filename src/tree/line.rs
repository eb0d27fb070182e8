//! Splits a raw input line into its depth, entry text and inline comment.
//!
//! Three notations are understood and may be mixed within one document:
//!
//! - indentation: `  src/`, two spaces per level
//! - bullets: `  - main.py`, a `-`, `*` or `+` marker followed by a space
//! - tree-command output: `│   ├── main.py`, four characters per level

use crate::config::{INDENT_WIDTH, TREE_INDENT_WIDTH};
use crate::tree::Rule;

const BULLET_MARKERS: [char; 3] = ['-', '*', '+'];
const TREE_CONNECTORS: [char; 4] = ['│', '├', '└', '─'];
const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub depth: usize,
    /// Entry text with indentation, bullet marker and comment removed.
    pub entry: &'a str,
    pub bullet: bool,
    pub comment: Option<&'a str>,
}

impl<'a> Line<'a> {
    /// Returns `Ok(None)` for lines that carry no entry: blank lines, comment-only
    /// lines and bare tree connectors such as `│`.
    pub fn scan(raw: &'a str) -> Result<Option<Self>, Rule> {
        let (width, tree_notation, rest) = split_prefix(raw)?;

        let (rest, comment) = split_comment(rest);
        let rest = rest.trim_end();
        if rest.is_empty() {
            return Ok(None);
        }

        let level_width = if tree_notation {
            TREE_INDENT_WIDTH
        } else {
            INDENT_WIDTH
        };
        if width % level_width != 0 {
            return Err(Rule::MisalignedIndentation);
        }

        let (entry, bullet) = match strip_bullet(rest) {
            Some(entry) => (entry, true),
            None => (rest, false),
        };

        Ok(Some(Self {
            depth: width / level_width,
            entry,
            bullet,
            comment,
        }))
    }
}

/// Measures the leading run of spaces and tree connectors, in characters.
fn split_prefix(raw: &str) -> Result<(usize, bool, &str), Rule> {
    let mut width = 0;
    let mut tree_notation = false;

    for (index, c) in raw.char_indices() {
        match c {
            ' ' => width += 1,
            '\t' => {
                if raw[index..].trim().is_empty() {
                    return Ok((width, tree_notation, ""));
                }
                return Err(Rule::MisalignedIndentation);
            }
            c if TREE_CONNECTORS.contains(&c) => {
                width += 1;
                tree_notation = true;
            }
            _ => return Ok((width, tree_notation, &raw[index..])),
        }
    }

    Ok((width, tree_notation, ""))
}

/// A `#` opens a comment when it starts the entry or follows whitespace.
fn split_comment(rest: &str) -> (&str, Option<&str>) {
    let marker = rest.char_indices().find(|&(index, c)| {
        c == COMMENT_MARKER && (index == 0 || rest[..index].ends_with(char::is_whitespace))
    });

    match marker {
        Some((index, _)) => {
            let comment = rest[index + COMMENT_MARKER.len_utf8()..].trim();
            (&rest[..index], (!comment.is_empty()).then_some(comment))
        }
        None => (rest, None),
    }
}

fn strip_bullet(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    let marker = chars.next().filter(|c| BULLET_MARKERS.contains(c))?;
    let after = &rest[marker.len_utf8()..];

    if after.is_empty() || after.starts_with(char::is_whitespace) {
        Some(after.trim())
    } else {
        None
    }
}
