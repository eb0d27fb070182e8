use std::fmt;

use hashlink::LinkedHashSet;

use crate::config::BaseDir;
use crate::emitter::Command;
use crate::tree::{NodeKind, Tree};

const SCRIPT_HEADER: &str = "#!/bin/sh\nset -e\n";

/// Renders a validated tree into shell commands. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    base_dir: Option<BaseDir>,
}

impl Emitter {
    pub fn new(base_dir: Option<BaseDir>) -> Self {
        Self { base_dir }
    }

    /// Walks the tree in pre-order, so every `mkdir -p` precedes the commands of
    /// its descendants. A path listed more than once is emitted at its first
    /// occurrence only.
    pub fn emit(&self, tree: &Tree) -> Script {
        let commands: LinkedHashSet<Command> = tree
            .iter()
            .map(|(path, node)| {
                let path = match &self.base_dir {
                    Some(base_dir) => base_dir.join(&path),
                    None => path,
                };
                match node.kind {
                    NodeKind::Directory => Command::MakeDirectory(path),
                    NodeKind::File => Command::Touch(path),
                }
            })
            .collect();

        Script {
            commands: commands.into_iter().collect(),
        }
    }
}

/// Ordered command list; displays as newline-joined commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Standalone POSIX script that stops at the first failing command.
    pub fn to_shell_script(&self) -> String {
        format!("{SCRIPT_HEADER}\n{}\n", self)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Script {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
