//! Configuration for neodb.
//!
//! Configuration comes from an optional YAML file, `neodb.yaml` in the
//! working directory unless `--config` names another. Command-line flags
//! override the file, and built-in defaults fill in anything left unset.
//!
//! ```yaml
//! data:
//!   neo-file: data/neos.csv
//!   cad-file: data/cad.json
//! ```
//!
//! Relative paths in a config file are resolved against the directory that
//! contains the file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "neodb.yaml";

/// Default NEO catalogue path
pub const DEFAULT_NEO_FILE: &str = "data/neos.csv";

/// Default close-approach document path
pub const DEFAULT_CAD_FILE: &str = "data/cad.json";

/// Configuration file structure for neodb
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NeodbConfig {
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Data file section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DataConfig {
    /// Path to the NEO CSV catalogue
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// Path to the close-approach JSON document
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from(DEFAULT_NEO_FILE)
}

fn default_cad_file() -> PathBuf {
    PathBuf::from(DEFAULT_CAD_FILE)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
        }
    }
}

impl NeodbConfig {
    /// Load configuration from a file, resolving relative data paths
    /// against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid
    /// configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative(base))
    }

    /// Load `neodb.yaml` from `dir` if it exists, otherwise use the
    /// defaults relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "No configuration file, using defaults");
            Ok(Self::default().resolve_relative(dir))
        }
    }

    /// Make relative data paths relative to `base`.
    #[must_use]
    pub fn resolve_relative(mut self, base: &Path) -> Self {
        for path in [&mut self.data.neo_file, &mut self.data.cad_file] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Replace the data paths given on the command line.
    #[must_use]
    pub fn with_overrides(mut self, neo_file: Option<PathBuf>, cad_file: Option<PathBuf>) -> Self {
        if let Some(neo_file) = neo_file {
            self.data.neo_file = neo_file;
        }
        if let Some(cad_file) = cad_file {
            self.data.cad_file = cad_file;
        }
        self
    }
}
