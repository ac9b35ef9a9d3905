use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "biosplit.toml";

/// Configuration loaded from biosplit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Splitting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Number of records written to each part file
    #[serde(default = "default_sequences_per_file")]
    pub sequences_per_file: usize,
    /// Delimiter to use instead of auto-detection
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            sequences_per_file: default_sequences_per_file(),
            delimiter: None,
        }
    }
}

fn default_sequences_per_file() -> usize {
    250
}

/// Output location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory in which the `{base}_splits` folder is created
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ask for a delimiter when none can be detected
    #[serde(default = "default_prompt_for_delimiter")]
    pub prompt_for_delimiter: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            prompt_for_delimiter: default_prompt_for_delimiter(),
        }
    }
}

fn default_prompt_for_delimiter() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load config from biosplit.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        sequences: Option<usize>,
        delimiter: Option<String>,
        output: Option<PathBuf>,
        no_prompt: bool,
    ) -> Self {
        if let Some(n) = sequences {
            self.split.sequences_per_file = n;
        }
        if let Some(d) = delimiter {
            self.split.delimiter = Some(d);
        }
        if let Some(o) = output {
            self.output.directory = o;
        }
        if no_prompt {
            self.behavior.prompt_for_delimiter = false;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.split.sequences_per_file == 0 {
            return Err(ConfigError::InvalidValue(
                "split.sequences_per_file must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
