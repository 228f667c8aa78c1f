//! Configuration loading
//!
//! `mirrorup.toml` carries the remote connection and the folder mappings:
//!
//! ```toml
//! [remote]
//! host = "203.0.113.5"
//! port = 2222
//! username = "deploy"
//! private_key_path = "~/.ssh/id_rsa"
//!
//! [[folders]]
//! id = "default"
//! hostpath = "."
//! guestpath = "/vagrant"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{FolderMapping, RemoteConnectionInfo};

/// Errors loading or parsing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration for a sync run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub remote: RemoteConnectionInfo,
    #[serde(default)]
    pub folders: Vec<FolderMapping>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A leading `~/` in `private_key_path` is expanded against the user's
    /// home directory when it can be determined.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.remote.private_key_path = expand_home(&config.remote.private_key_path);
        Ok(config)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(stripped) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(stripped),
        None => path.to_path_buf(),
    }
}
