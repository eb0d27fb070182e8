//! Path-safety rules applied to every entry name.

use crate::config::RESERVED_NAMES;
use crate::tree::Rule;
use crate::tree::node::SEPARATOR;

/// Whether `c` may appear in an entry. The separator is tolerated here so that a
/// misplaced `/` is reported by the absolute-path and traversal guards instead.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | SEPARATOR)
}

/// Validates a trimmed entry and returns its name with the directory marker removed.
///
/// Guards run in a fixed order and the first failing one wins, so `a b$` is a
/// space violation and `a/../b` is a traversal rather than a stray separator.
pub fn check_entry(entry: &str) -> Result<&str, Rule> {
    if entry.contains(' ') {
        return Err(Rule::ContainsSpace);
    }
    if !entry.chars().all(is_allowed_char) {
        return Err(Rule::InvalidCharacter);
    }
    if entry.starts_with(SEPARATOR) {
        return Err(Rule::AbsolutePath);
    }

    let name = entry.strip_suffix(SEPARATOR).unwrap_or(entry);
    if name
        .split(SEPARATOR)
        .any(|segment| segment == "." || segment == "..")
    {
        return Err(Rule::PathTraversal);
    }
    if name.contains(SEPARATOR) {
        return Err(Rule::InvalidCharacter);
    }

    check_segment(name)?;
    Ok(name)
}

/// Rules for a single, separator-free path segment.
pub fn check_segment(segment: &str) -> Result<(), Rule> {
    if segment.is_empty() {
        return Err(Rule::EmptyName);
    }
    if segment.contains(' ') {
        return Err(Rule::ContainsSpace);
    }
    if !segment.chars().all(is_allowed_char) || segment.contains(SEPARATOR) {
        return Err(Rule::InvalidCharacter);
    }
    if segment == "." || segment == ".." {
        return Err(Rule::PathTraversal);
    }
    if segment.starts_with('-') {
        return Err(Rule::LeadingDash);
    }
    if RESERVED_NAMES.contains(&segment) {
        return Err(Rule::ReservedName);
    }
    Ok(())
}
