// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Render configuration
//!
//! A [`Config`] is read when a tree is rendered, never when it is built. The
//! process keeps one shared value for [`crate::render`]; callers wanting
//! explicit control pass their own to [`crate::render_with`].
//!
//! The shared value is meant to have a single writer. Each render takes one
//! snapshot up front, so a concurrent write only affects later renders.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};

/// Config file looked up by [`Config::load`]
pub const CONFIG_FILE: &str = "scadkit.toml";

/// Settings consumed by the serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `$fn` for spheres and cylinders
    pub resolution: u32,
    /// Appended to `import(...)` as `convexity = N` when set
    pub import_convexity: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: 50,
            import_convexity: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `scadkit.toml` from the current directory if present, then apply
    /// `SCADKIT_RESOLUTION` and `SCADKIT_IMPORT_CONVEXITY` overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment variable overrides in place
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(resolution) = env_u32("SCADKIT_RESOLUTION")? {
            self.resolution = resolution;
        }

        if let Some(convexity) = env_u32("SCADKIT_IMPORT_CONVEXITY")? {
            self.import_convexity = Some(convexity);
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pretty TOML representation
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn env_u32(var: &'static str) -> Result<Option<u32>> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}

fn shared() -> &'static RwLock<Config> {
    static SHARED: OnceLock<RwLock<Config>> = OnceLock::new();
    SHARED.get_or_init(|| RwLock::new(Config::default()))
}

/// Current process-wide configuration
pub fn global() -> Config {
    *shared().read().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the process-wide configuration
pub fn set_global(config: Config) {
    *shared().write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Edit the process-wide configuration in place
pub fn update_global(f: impl FnOnce(&mut Config)) {
    let mut guard = shared().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.resolution, 50);
        assert_eq!(config.import_convexity, None);
    }

    #[test]
    fn test_from_file_partial() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "resolution = 12").unwrap();

        let config = Config::from_file(file.path())?;
        assert_eq!(config.resolution, 12);
        assert_eq!(config.import_convexity, None);

        Ok(())
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "resolution = \"many\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/scadkit.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            resolution: 96,
            import_convexity: Some(4),
        };

        config.save(file.path())?;
        assert_eq!(Config::from_file(file.path())?, config);

        Ok(())
    }
}
