use derive_more::Display;

/// One shell command recreating a single tree entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Command {
    #[display("mkdir -p {_0}")]
    MakeDirectory(String),
    #[display("touch {_0}")]
    Touch(String),
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Command::MakeDirectory(_) => "mkdir -p",
            Command::Touch(_) => "touch",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Command::MakeDirectory(path) | Command::Touch(path) => path,
        }
    }
}
