use std::path::{Path, PathBuf};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::config::ParseLimits;

const CONFIG_FILE_NAME: &str = "treegen.yaml";

fn get_config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Settings read from `treegen.yaml`. Every field is optional; absent values fall
/// back to command-line flags or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreegenConfig {
    pub base_dir: Option<String>,
    pub max_nodes: Option<usize>,
    pub max_depth: Option<usize>,
    pub max_path_length: Option<usize>,
}

impl TreegenConfig {
    /// Reads `treegen.yaml` from `root`, or returns defaults when there is none.
    pub async fn read(root: &Path) -> Result<Self, ConfigError> {
        let path = get_config_file_path(root);
        if !path.is_file() {
            info!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_path(path).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, ConfigError> {
        debug!("Reading config file: {}", path.display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    /// Applies the configured limits on top of `limits`.
    pub fn apply_to(&self, limits: ParseLimits) -> ParseLimits {
        ParseLimits {
            max_nodes: self.max_nodes.unwrap_or(limits.max_nodes),
            max_depth: self.max_depth.unwrap_or(limits.max_depth),
            max_path_length: self.max_path_length.unwrap_or(limits.max_path_length),
        }
    }

    fn parse_limits(&mut self, limits: &LinkedHashMap<Yaml, Yaml>) -> Result<(), ConfigError> {
        for (name, value) in limits {
            let slot = match name.as_str() {
                Some("max_nodes") => &mut self.max_nodes,
                Some("max_depth") => &mut self.max_depth,
                Some("max_path_length") => &mut self.max_path_length,
                _ => {
                    debug!("Skipping unknown limit: {:?}", name);
                    continue;
                }
            };
            *slot = Some(Self::parse_limit(name, value)?);
        }
        Ok(())
    }

    fn parse_limit(name: &Yaml, value: &Yaml) -> Result<usize, ConfigError> {
        let key = name.as_str().unwrap_or_default().to_string();
        match value {
            Yaml::Value(Scalar::Integer(number)) => {
                usize::try_from(*number).map_err(|_| ConfigError::InvalidLimit { key })
            }
            _ => Err(ConfigError::InvalidLimit { key }),
        }
    }
}

impl TryFrom<&str> for TreegenConfig {
    type Error = ConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents =
            Yaml::load_from_str(contents).map_err(|e| ConfigError::YamlError { source: e })?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().ok_or(ConfigError::TopLevelNotMap)?;
        let mut config = Self::default();

        for (name, value) in top_level {
            match name.as_str() {
                Some("base_dir") => {
                    let base_dir = value.as_str().ok_or(ConfigError::BaseDirNotString)?;
                    config.base_dir = Some(base_dir.to_string());
                }
                Some("limits") => {
                    let limits = value.as_mapping().ok_or(ConfigError::LimitsNotMap)?;
                    config.parse_limits(limits)?;
                }
                _ => debug!("Skipping unknown config entry: {:?}", name),
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    YamlError { source: saphyr::ScanError },
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Limits section should be a map"))]
    LimitsNotMap,
    #[snafu(display("base_dir should be a string"))]
    BaseDirNotString,
    #[snafu(display("Limit '{}' should be a non-negative integer", key))]
    InvalidLimit { key: String },
}
