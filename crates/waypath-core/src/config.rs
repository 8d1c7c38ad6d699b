//! Configuration for waypath
//!
//! Settings live in a TOML file (conventionally `waypath.toml`). Every key
//! is optional; missing keys fall back to their defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, WaypathError};

pub use types::{GraphConfig, TraceConfig, WaypathConfig};

/// Conventional config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "waypath.toml";

impl WaypathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WaypathError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: WaypathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load an explicit config file, or fall back to defaults.
    ///
    /// An explicit path must exist. Without one, `waypath.toml` in `dir` is
    /// used when present.
    pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}
