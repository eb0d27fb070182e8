use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Turns an indented directory tree into `mkdir -p` and `touch` commands.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File containing the tree; `-` or nothing reads stdin
    pub input: Option<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory searched for treegen.yaml
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Explicit config file, replacing the treegen.yaml lookup
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Relative directory every generated path is placed under
    #[clap(long, short)]
    pub base_dir: Option<String>,

    /// Maximum number of entries in the tree
    #[clap(long)]
    pub max_nodes: Option<usize>,

    /// Maximum nesting depth, top-level entries being depth 0
    #[clap(long)]
    pub max_depth: Option<usize>,

    /// Print the parsed tree instead of commands
    #[clap(long, short)]
    pub preview: bool,

    /// Keep inline comments in the preview
    #[clap(long, requires = "preview")]
    pub comments: bool,

    /// Write the result to a file instead of stdout
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}
