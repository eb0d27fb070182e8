//! Shell command generation for validated trees.

mod command;
mod emitter;

pub use command::Command;
pub use emitter::{Emitter, Script};
