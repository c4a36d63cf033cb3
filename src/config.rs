// src/config.rs

//! Configuration file discovery and decoding
//!
//! Recipe and unit tables live in two files, `recipes.toml` and `units.toml`,
//! in a configuration directory. JSON is accepted as well (`.json`), since
//! the unit table has historically been kept as `converter.json`.
//!
//! # Lookup order
//!
//! 1. Explicit file paths (`--recipes`, `--units`)
//! 2. Explicit directory (`--config-dir` or `LEVAIN_CONFIG_DIR`)
//! 3. `$XDG_CONFIG_HOME/levain` (or platform equivalent) if it has a recipe book
//! 4. `/etc/levain`

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// System-wide configuration directory
pub const DEFAULT_CONFIG_DIR: &str = "/etc/levain";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "LEVAIN_CONFIG_DIR";

/// Recipe book file name inside a configuration directory
pub const RECIPES_FILE: &str = "recipes.toml";

/// Unit conversion file name inside a configuration directory
pub const UNITS_FILE: &str = "units.toml";

/// Errors that can occur while loading recipe and unit tables
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("Unsupported configuration format for {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid recipe '{recipe}': {reason}")]
    InvalidRecipe { recipe: String, reason: String },

    #[error("Invalid unit conversion for '{ingredient}': {reason}")]
    InvalidConversion { ingredient: String, reason: String },

    #[error("Unit table has no entry for '{ingredient}' (needed by {needed_by})")]
    MissingConversion { ingredient: String, needed_by: String },

    #[error("Recipe book is empty")]
    EmptyRecipeBook,
}

/// On-disk encoding of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Decode `content`; `origin` names the source in error messages
    pub fn deserialize<T: DeserializeOwned>(self, content: &str, origin: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                reason: e.message().to_string(),
            }),
            Self::Json => serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Read and decode a configuration file, choosing the format by extension
pub fn read_config_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    format.deserialize(&content, &path.display().to_string())
}

/// Resolved locations of the recipe book and unit table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub recipes: PathBuf,
    pub units: PathBuf,
}

impl ConfigPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            recipes: dir.join(RECIPES_FILE),
            units: dir.join(UNITS_FILE),
        }
    }

    /// Apply the lookup order; explicit file paths override the directory
    pub fn resolve(config_dir: Option<&Path>, recipes: Option<&Path>, units: Option<&Path>) -> Self {
        let dir = config_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_dir);
        let mut paths = Self::in_dir(&dir);

        if let Some(recipes) = recipes {
            paths.recipes = recipes.to_path_buf();
        }
        if let Some(units) = units {
            paths.units = units.to_path_buf();
        }

        paths
    }
}

/// User configuration directory if it holds a recipe book, else `/etc/levain`
pub fn default_config_dir() -> PathBuf {
    if let Some(user_dir) = dirs::config_dir().map(|d| d.join("levain"))
        && user_dir.join(RECIPES_FILE).exists()
    {
        return user_dir;
    }
    PathBuf::from(DEFAULT_CONFIG_DIR)
}
