//! Engine configuration for crossing
//!
//! Configuration is read from a TOML file, `crossing.toml` by default:
//!
//! ```toml
//! [wait]
//! kind = "constant"
//! value = 5.0
//!
//! [query]
//! source = 0
//!
//! [output]
//! precision = 2
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{CrossingError, Result};

pub use types::{EngineConfig, OutputConfig, QueryConfig, CONFIG_FILE_NAME};

/// Largest accepted `output.precision`
const MAX_PRECISION: usize = 17;

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), wait = ?config.wait, "load_config");
        Ok(config)
    }

    /// Load `path` if given, else `crossing.toml` under `dir` if present,
    /// else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CrossingError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        self.wait.validate()?;
        if let Some(precision) = self.output.precision {
            if precision > MAX_PRECISION {
                bail_invalid!("output precision", precision);
            }
        }
        Ok(())
    }
}
