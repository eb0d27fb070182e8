//! Limits and settings that shape parsing and emission.

mod base_dir;
mod config_file;
mod limits;

pub use base_dir::{BaseDir, BaseDirError};
pub use config_file::{ConfigError, TreegenConfig};
pub use limits::{
    INDENT_WIDTH, MAX_DEPTH, MAX_NODES, MAX_PATH_LENGTH, ParseLimits, RESERVED_NAMES,
    TREE_INDENT_WIDTH,
};
