use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::search::ScoreWeights;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "config io error: {error}"),
            Self::Parse(error) => write!(f, "config parse error: {error}"),
            Self::Invalid(error) => write!(f, "config invalid: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_results: u16,
    pub catalog_path: Option<PathBuf>,
    pub weights: ScoreWeights,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: 8,
            catalog_path: None,
            weights: ScoreWeights::default(),
            config_path: stable_app_data_dir().join(CONFIG_FILE_NAME),
        }
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("SENSEI_DATA_DIR") {
        return PathBuf::from(dir);
    }
    std::env::temp_dir().join("sensei")
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.max_results < 1 || cfg.max_results > 50 {
        return Err("max_results out of range".into());
    }

    cfg.weights.validate()?;

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    Ok(())
}

pub fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config_path = path.unwrap_or_else(|| stable_app_data_dir().join(CONFIG_FILE_NAME));

    let mut config = if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path)?;
        toml::from_str::<Config>(&raw).map_err(|error| ConfigError::Parse(error.to_string()))?
    } else {
        Config::default()
    };
    config.config_path = config_path;

    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = cfg.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let encoded =
        toml::to_string_pretty(cfg).map_err(|error| ConfigError::Parse(error.to_string()))?;
    std::fs::write(&cfg.config_path, encoded)?;
    Ok(())
}
