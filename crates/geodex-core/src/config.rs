//! Engine configuration.
//!
//! Configuration is plain data: it is loaded once (usually from TOML), validated,
//! and handed to the query engine by value. Nothing here is global.

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, model::rating::RatingScale};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be at least 1")]
    ZeroPageSize { field: &'static str },

    #[error("default_page_size ({default}) must not exceed max_page_size ({max})")]
    DefaultExceedsMax { default: u32, max: u32 },
}

///
/// QueryConfig
///
/// Paging policy and rating scale used by every query an engine runs.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub rating_scale: RatingScale,
}

impl QueryConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize {
                field: "default_page_size",
            });
        }
        if self.max_page_size == 0 {
            return Err(ConfigError::ZeroPageSize {
                field: "max_page_size",
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::DefaultExceedsMax {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }

        Ok(())
    }

    /// Resolve a requested page size: absent uses the default, present is
    /// clamped into `[1, max_page_size]`.
    #[must_use]
    pub fn resolve_page_size(&self, requested: Option<u32>) -> usize {
        let size = requested.map_or(self.default_page_size, |limit| {
            limit.clamp(1, self.max_page_size)
        });

        usize::try_from(size).unwrap_or(usize::MAX)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            rating_scale: RatingScale::default(),
        }
    }
}

///
/// TESTS
///
