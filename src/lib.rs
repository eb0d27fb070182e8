#![allow(clippy::enum_variant_names)]

//! Turns a plain-text directory tree into the shell commands that recreate it.
//!
//! ```text
//! project/
//!   src/
//!     - main.py
//! ```
//!
//! becomes `mkdir -p project`, `mkdir -p project/src` and
//! `touch project/src/main.py`. The [`tree`] module parses and validates the
//! notation, [`emitter`] renders commands; neither touches the filesystem.

pub mod application;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod tree;
