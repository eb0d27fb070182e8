use std::path::Path;

use colored::Colorize;
use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{BaseDir, BaseDirError, ConfigError, ParseLimits, TreegenConfig};
use crate::emitter::{Command, Emitter, Script};
use crate::tree::{ParseError, Parser, TreePreview};

pub struct Application;

/// What a run produces before it is printed or written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Script(Script),
    Preview(String),
}

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let config = match &app_config.config {
            Some(path) => TreegenConfig::from_path(path.clone()).await,
            None => TreegenConfig::read(&app_config.root).await,
        }
        .context(ConfigLoadSnafu)?;
        debug!("Loaded config: {:?}", config);

        let input = Self::read_input(app_config.input.as_deref()).await?;
        let output = Self::generate(&app_config, &config, &input)?;

        match (&app_config.output, output) {
            (Some(path), output) => {
                let contents = match output {
                    Output::Script(script) => script.to_shell_script(),
                    Output::Preview(preview) => preview + "\n",
                };
                Self::write_output(path, contents).await?;
                info!("Wrote {}", path.display());
            }
            (None, Output::Script(script)) => print_script(&script),
            (None, Output::Preview(preview)) => println!("{preview}"),
        }

        Ok(())
    }

    /// Parses `input` and renders it according to the run and file settings.
    /// Flags take precedence over the config file, which takes precedence over
    /// the built-in defaults.
    pub fn generate(
        app_config: &RuntimeConfig,
        config: &TreegenConfig,
        input: &str,
    ) -> Result<Output, ApplicationError> {
        let limits = Self::limits(app_config, config);
        debug!("Using limits: {:?}", limits);

        let base_dir = app_config
            .base_dir
            .as_deref()
            .or(config.base_dir.as_deref())
            .map(BaseDir::parse)
            .transpose()
            .context(InvalidBaseDirSnafu)?
            .flatten();

        let tree = Parser::new(limits).parse(input).context(TreeParseSnafu)?;
        info!("Parsed tree with {} entries", tree.len());

        if app_config.preview {
            return Ok(Output::Preview(
                TreePreview::new(app_config.comments).render(&tree),
            ));
        }

        let script = Emitter::new(base_dir).emit(&tree);
        info!("Generated {} commands", script.len());
        Ok(Output::Script(script))
    }

    fn limits(app_config: &RuntimeConfig, config: &TreegenConfig) -> ParseLimits {
        let mut limits = config.apply_to(ParseLimits::default());
        if let Some(max_nodes) = app_config.max_nodes {
            limits = limits.with_max_nodes(max_nodes);
        }
        if let Some(max_depth) = app_config.max_depth {
            limits = limits.with_max_depth(max_depth);
        }
        limits
    }

    async fn read_input(path: Option<&Path>) -> Result<String, ApplicationError> {
        let Some(path) = path else {
            debug!("Reading tree from stdin");
            return std::io::read_to_string(std::io::stdin()).context(StdinReadSnafu);
        };

        debug!("Reading tree from {}", path.display());
        let bytes = fs::read(path).await.context(InputReadSnafu {
            file_path: path.display().to_string(),
        })?;
        String::from_utf8(bytes).context(InputEncodingSnafu {
            file_path: path.display().to_string(),
        })
    }

    async fn write_output(path: &Path, contents: String) -> Result<(), ApplicationError> {
        let res = fs::write(path, contents.into_bytes()).await;
        res.0.context(OutputWriteSnafu {
            file_path: path.display().to_string(),
        })
    }
}

fn print_script(script: &Script) {
    if supports_color::on(Stream::Stdout).is_none() {
        println!("{script}");
        return;
    }

    for command in script.commands() {
        let verb = match command {
            Command::MakeDirectory(_) => command.verb().blue().bold(),
            Command::Touch(_) => command.verb().green().bold(),
        };
        println!("{verb} {}", command.path());
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading configuration"))]
    ConfigLoadError { source: ConfigError },
    #[snafu(display("Critical failure encountered while resolving the base directory"))]
    InvalidBaseDirError { source: BaseDirError },
    #[snafu(display("Failed to read input from stdin"))]
    StdinReadError { source: std::io::Error },
    #[snafu(display("Failed to read input file: {}", file_path))]
    InputReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Input file {} is not valid UTF-8", file_path))]
    InputEncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Input is not a valid directory tree"))]
    TreeParseError { source: ParseError },
    #[snafu(display("Failed to write output file: {}", file_path))]
    OutputWriteError {
        file_path: String,
        source: std::io::Error,
    },
}
