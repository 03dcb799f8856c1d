//! Configuration loading and path resolution.
//!
//! Supports HOSTSEDIT_HOME env var override for testing.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::platform;

/// Paths for the hostsedit config store.
#[derive(Debug, Clone)]
pub struct HostseditPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl HostseditPaths {
    /// Build paths from base directory (e.g. ProjectDirs config dir or HOSTSEDIT_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let config_file = base.join("config.toml");
        Self {
            config_dir: base,
            config_file,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects HOSTSEDIT_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("HOSTSEDIT_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("com", "hostsedit", "hostsedit") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".hostsedit")
        };
        Self::from_base(base)
    }
}

/// Main config.toml structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Hosts file to edit instead of the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts_file: Option<PathBuf>,
    /// Load in strict mode unless told otherwise.
    #[serde(default)]
    pub strict: bool,
}

/// Path to config.toml (respects HOSTSEDIT_HOME).
pub fn config_path() -> PathBuf {
    HostseditPaths::default_paths().config_file
}

impl Config {
    /// Load config from paths (with shared lock when file exists).
    pub fn load(paths: &HostseditPaths) -> Result<Config> {
        if paths.config_file.is_file() {
            let mut file = fs::OpenOptions::new()
                .read(true)
                .open(&paths.config_file)
                .with_context(|| format!("open {}", paths.config_file.display()))?;
            fs2::FileExt::lock_shared(&file)?;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parse {}", paths.config_file.display()))?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to paths (with exclusive lock). Creates parent dirs if needed.
    pub fn save(&self, paths: &HostseditPaths) -> Result<()> {
        if let Some(p) = paths.config_file.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&paths.config_file)?;
        fs2::FileExt::lock_exclusive(&file)?;
        let s = toml::to_string_pretty(self)?;
        file.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Hosts file to operate on: explicit flag, then HOSTSEDIT_HOSTS_FILE,
    /// then this config, then the platform default.
    pub fn resolve_hosts_file(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(p) = flag {
            return p.to_path_buf();
        }
        if std::env::var_os(platform::HOSTS_FILE_ENV).is_none() {
            if let Some(p) = &self.hosts_file {
                return p.clone();
            }
        }
        platform::default_hosts_path()
    }
}
