//! Parsing of plain-text directory tree notation.
//!
//! Text is read line by line, the hierarchy is inferred from indentation and
//! every entry is checked against the path-safety rules before it joins the
//! tree. Parsing is fail-fast: the first violation aborts with a [`ParseError`]
//! and no partial tree is returned.

mod error;
mod line;
mod node;
mod parser;
mod preview;
pub mod rules;

pub use error::{ParseError, Rule};
pub use node::{Node, NodeKind, PreOrder, SEPARATOR, Tree};
pub use parser::Parser;
pub use preview::TreePreview;
