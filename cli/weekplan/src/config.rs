//! CLI configuration.
//!
//! Sources, lowest precedence first:
//! - Built-in defaults (a week of half-hour blocks, first-fit)
//! - `config.toml` in the platform config directory
//! - `WEEKPLAN_*` environment variables
//!
//! A plan file's `[grid]` table and command-line flags override all of these.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use weekplan_grid::{GridError, GridShape};
use weekplan_placement::StrategyKind;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

pub const DAYS_ENV: &str = "WEEKPLAN_DAYS_PER_WEEK";
pub const BLOCKS_ENV: &str = "WEEKPLAN_BLOCKS_PER_DAY";
pub const STRATEGY_ENV: &str = "WEEKPLAN_STRATEGY";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "weekplan", "weekplan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Days in the grid.
    pub days_per_week: usize,

    /// Blocks per day.
    pub blocks_per_day: usize,

    /// Strategy used when `--strategy` is not given.
    pub default_strategy: StrategyKind,
}

impl Default for Config {
    fn default() -> Self {
        let shape = GridShape::default();
        Self {
            days_per_week: shape.days_per_week(),
            blocks_per_day: shape.blocks_per_day(),
            default_strategy: StrategyKind::default(),
        }
    }
}

impl Config {
    /// Path of the config file, whether or not it exists.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from disk (or defaults) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        let config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", path))?
        } else {
            Self::default()
        };

        config.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `WEEKPLAN_*` overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DAYS_ENV) {
            self.days_per_week = value
                .trim()
                .parse()
                .with_context(|| format!("{DAYS_ENV} must be a positive integer"))?;
        }
        if let Some(value) = lookup(BLOCKS_ENV) {
            self.blocks_per_day = value
                .trim()
                .parse()
                .with_context(|| format!("{BLOCKS_ENV} must be a positive integer"))?;
        }
        if let Some(value) = lookup(STRATEGY_ENV) {
            self.default_strategy = value
                .parse()
                .map_err(CliError::from)
                .with_context(|| format!("{STRATEGY_ENV} is not a known strategy"))?;
        }
        Ok(self)
    }

    /// The configured grid shape.
    pub fn shape(&self) -> Result<GridShape, GridError> {
        GridShape::new(self.days_per_week, self.blocks_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.days_per_week, 7);
        assert_eq!(config.blocks_per_day, 48);
        assert_eq!(config.default_strategy, StrategyKind::FirstFit);
        assert_eq!(config.shape().unwrap(), GridShape::HALF_HOUR_WEEK);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("blocks_per_day = 16\n").unwrap();
        assert_eq!(config.days_per_week, 7);
        assert_eq!(config.blocks_per_day, 16);
    }

    #[test]
    fn test_toml_strategy() {
        let config = Config::from_toml_str("default_strategy = \"earliest-day\"\n").unwrap();
        assert_eq!(config.default_strategy, StrategyKind::EarliestDay);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_env(|key| match key {
                BLOCKS_ENV => Some("8".to_string()),
                STRATEGY_ENV => Some("earliest-day".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.blocks_per_day, 8);
        assert_eq!(config.days_per_week, 7);
        assert_eq!(config.default_strategy, StrategyKind::EarliestDay);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let result = Config::default().with_env(|key| {
            (key == DAYS_ENV).then(|| "seven".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_env_unknown_strategy_is_cli_error() {
        let err = Config::default()
            .with_env(|key| (key == STRATEGY_ENV).then(|| "best-fit".to_string()))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownStrategy(_))
        ));
        assert!(format!("{err:#}").contains("best-fit"));
    }

    #[test]
    fn test_zero_shape_is_error() {
        let config = Config {
            blocks_per_day: 0,
            ..Config::default()
        };
        assert!(config.shape().is_err());
    }
}
