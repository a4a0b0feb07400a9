//! YAML configuration for the `commons` CLI.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::id::DEFAULT_ID_WIDTH;
use crate::ports::filesystem::FileSystem;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "COMMONS_CONFIG";

/// Config file picked up from the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = ".commons.yaml";

/// Defaults applied by the CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sequence width for `commons id`.
    pub id_width: usize,
    /// First value drawn from the sequence counter.
    pub counter_start: u64,
    /// Parameters available to every expansion. `-p` values override them.
    pub params: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { id_width: DEFAULT_ID_WIDTH, counter_start: 0, params: HashMap::new() }
    }
}

impl Config {
    /// Loads the config named by `explicit`, else by `$COMMONS_CONFIG`, else
    /// `.commons.yaml` if it exists, else returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a named file is missing or invalid.
    pub fn load(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        Self::load_from(fs, named.as_deref())
    }

    /// Like [`Config::load`] without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `named` is missing or any file is invalid.
    pub fn load_from(fs: &dyn FileSystem, named: Option<&Path>) -> Result<Self> {
        match named {
            Some(path) => Self::read(fs, path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fs.exists(fallback) {
                    Self::read(fs, fallback)
                } else {
                    debug!("no config file; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parses a config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML does not describe a config.
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config_error(path, e))
    }

    /// Returns the configured parameters overlaid with `overrides`.
    #[must_use]
    pub fn merged_params(&self, overrides: HashMap<String, String>) -> HashMap<String, String> {
        let mut params = self.params.clone();
        params.extend(overrides);
        params
    }

    fn read(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let yaml = fs.read_to_string(path).map_err(|e| config_error(path, e))?;
        Self::from_yaml(path, &yaml)
    }
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Config { path: path.to_path_buf(), message: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::maps;

    #[test]
    fn defaults_when_nothing_is_named() {
        let config = Config::default();
        assert_eq!(config.id_width, 3);
        assert_eq!(config.counter_start, 0);
        assert!(config.params.is_empty());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(Path::new("c.yaml"), "counter_start: 40\n").unwrap();
        assert_eq!(config.counter_start, 40);
        assert_eq!(config.id_width, 3);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml(Path::new("c.yaml"), "  \n").unwrap(), Config::default());
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = Config::from_yaml(Path::new("c.yaml"), "id_width: [oops").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn named_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commons.yaml");
        std::fs::write(&path, "id_width: 5\nparams:\n  desk: fx\n").unwrap();

        let config = Config::load_from(&LiveFileSystem, Some(&path)).unwrap();
        assert_eq!(config.id_width, 5);
        assert_eq!(config.params["desk"], "fx");
    }

    #[test]
    fn explicit_path_wins_over_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explicit.yaml");
        std::fs::write(&path, "id_width: 7\n").unwrap();

        let config = Config::load(&LiveFileSystem, Some(&path)).unwrap();
        assert_eq!(config.id_width, 7);
    }

    #[test]
    fn missing_named_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = Config::load_from(&LiveFileSystem, Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { path: ref p, .. } if *p == path));
    }

    #[test]
    fn overrides_win_over_configured_params() {
        let config = Config {
            params: maps::of([
                ("desk".to_string(), "fx".to_string()),
                ("a".to_string(), "1".to_string()),
            ]),
            ..Config::default()
        };
        let merged = config.merged_params(maps::of([("desk".to_string(), "rates".to_string())]));
        assert_eq!(merged["desk"], "rates");
        assert_eq!(merged["a"], "1");
    }
}
