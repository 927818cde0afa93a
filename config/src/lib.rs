//! Configuration for nestwalk.
//!
//! Settings live in `~/.nestwalk/config.toml`, or wherever `NESTWALK_CONFIG`
//! points:
//!
//! ```toml
//! [walk]
//! order = "breadth_first"
//! ignore_circular_references = false
//! key_order = "natural"
//!
//! [output]
//! format = "json"
//! max_depth = 8
//! skip_keys = ["node_modules"]
//! ```
//!
//! A missing file is not an error; every field has a default.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use nestwalk_types::{UnknownVariant, WalkOptions};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "NESTWALK_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NestwalkConfig {
    pub walk: Option<WalkOptions>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Containers at this depth or deeper are pruned.
    pub max_depth: Option<usize>,
    /// Containers stored under any of these keys are pruned.
    #[serde(default)]
    pub skip_keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<pointer>\t<value>` per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" | "jsonl" | "ndjson" => Ok(Self::Json),
            _ => Err(UnknownVariant {
                kind: "output format",
                value: s.to_string(),
                expected: "plain, json",
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl NestwalkConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Walk options from `[walk]`, or the defaults.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        self.walk.unwrap_or_default()
    }

    /// The `[output]` table, or the defaults.
    #[must_use]
    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn resolve_config_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => Some(path),
        _ => dirs::home_dir().map(|home| home.join(".nestwalk").join("config.toml")),
    }
}
