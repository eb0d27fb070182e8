use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for a single run, as requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Tree notation file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Directory searched for `treegen.yaml` when no explicit config is given.
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub base_dir: Option<String>,
    pub max_nodes: Option<usize>,
    pub max_depth: Option<usize>,
    pub preview: bool,
    pub comments: bool,
    pub output: Option<PathBuf>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input.filter(|path| path.as_os_str() != "-"),
            root: cli.root,
            config: cli.config,
            base_dir: cli.base_dir,
            max_nodes: cli.max_nodes,
            max_depth: cli.max_depth,
            preview: cli.preview,
            comments: cli.comments,
            output: cli.output,
        }
    }
}
