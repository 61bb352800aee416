//! Configuration for graphlab
//!
//! Configuration is read from `graphlab.toml` (or an explicit `--config`
//! path). Every field has a default, so an absent file is equivalent to an
//! empty one.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphLabError, Result};

pub use types::{
    LabConfig, OutputConfig, ValidationConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION,
};

impl LabConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LabConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer graphlab; unknown settings are ignored"
            );
        }

        Ok(config)
    }

    /// Load from an explicit path, or from `graphlab.toml` under `dir` when
    /// present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphLabError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
