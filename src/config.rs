//! Configuration handling for ctrcomp
//!
//! Configuration is stored in `~/.config/ctrcomp/config.toml`. Every field
//! is optional; unset paths fall back to the container tools' defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::complete::AccountFiles;
use crate::engine::SnapshotEngine;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// JSONL entity snapshot the engine reads
    pub snapshot: Option<PathBuf>,

    /// `containers.conf` holding service destinations
    pub containers_conf: Option<PathBuf>,

    /// `registries.conf` holding search registries
    pub registries_conf: Option<PathBuf>,

    /// User database for `--user`
    pub passwd: Option<PathBuf>,

    /// Group database for `--user`
    pub group: Option<PathBuf>,
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "ctrcomp", "ctrcomp")
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join("snapshot.jsonl"))
                .unwrap_or_else(|| PathBuf::from("snapshot.jsonl"))
        })
    }

    pub fn containers_conf_path(&self) -> PathBuf {
        self.containers_conf.clone().unwrap_or_else(|| {
            BaseDirs::new()
                .map(|dirs| dirs.config_dir().join("containers").join("containers.conf"))
                .unwrap_or_else(|| PathBuf::from("/etc/containers/containers.conf"))
        })
    }

    pub fn registries_conf_path(&self) -> PathBuf {
        self.registries_conf
            .clone()
            .unwrap_or_else(|| PathBuf::from("/etc/containers/registries.conf"))
    }

    pub fn accounts(&self) -> AccountFiles {
        let defaults = AccountFiles::default();
        AccountFiles {
            passwd: self.passwd.clone().unwrap_or(defaults.passwd),
            group: self.group.clone().unwrap_or(defaults.group),
        }
    }

    /// The engine described by this configuration
    pub fn engine(&self) -> SnapshotEngine {
        SnapshotEngine::new(self.snapshot_path())
            .with_containers_conf(self.containers_conf_path())
            .with_registries_conf(self.registries_conf_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.registries_conf_path(),
            PathBuf::from("/etc/containers/registries.conf")
        );
        assert_eq!(config.accounts(), AccountFiles::default());
    }

    #[test]
    fn parse_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
snapshot = "/var/lib/ctrcomp/snapshot.jsonl"
passwd = "/srv/passwd"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.snapshot_path(),
            PathBuf::from("/var/lib/ctrcomp/snapshot.jsonl")
        );
        assert_eq!(config.accounts().passwd, PathBuf::from("/srv/passwd"));
        assert_eq!(config.accounts().group, PathBuf::from("/etc/group"));
        assert_eq!(
            config.engine().path(),
            Path::new("/var/lib/ctrcomp/snapshot.jsonl")
        );
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "snapshot = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
