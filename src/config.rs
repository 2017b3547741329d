//! Configuration loading and settings resolution.
//!
//! Supports LAPTOP_BRICK_HOME env var override for testing.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default poll interval between device reads.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// Default blocklist path, relative to the working directory.
pub const DEFAULT_BLOCKLIST: &str = "blocklist";

/// Paths for laptop-brick data.
#[derive(Debug, Clone)]
pub struct BrickPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl BrickPaths {
    /// Build paths from base directory (e.g. ProjectDirs config dir or LAPTOP_BRICK_HOME).
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

    /// Get default paths (respects LAPTOP_BRICK_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("LAPTOP_BRICK_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("dev", "laptop-brick", "laptop-brick")
        {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".laptop-brick")
        };
        Self::from_base(base)
    }
}

/// config.toml structure. Every field is optional.
#[derive(Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocklist: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,
}

impl Config {
    /// Load config.toml; a missing file is an empty config.
    pub fn load(paths: &BrickPaths) -> Result<Config> {
        if !paths.config_file.is_file() {
            return Ok(Config::default());
        }
        let s = std::fs::read_to_string(&paths.config_file)
            .with_context(|| format!("read config: {}", paths.config_file.display()))?;
        let cfg: Config = toml::from_str(&s)
            .with_context(|| format!("parse config: {}", paths.config_file.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid config: {}", paths.config_file.display()))?;
        Ok(cfg)
    }

    /// Reject values the watcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == Some(0) {
            anyhow::bail!("poll_interval_secs must be at least 1");
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("ip_address", &self.ip_address)
            .field("username", &self.username)
            .field("blocklist", &self.blocklist)
            .field("hosts_file", &self.hosts_file)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .finish_non_exhaustive()
    }
}

/// Values given on the command line.
#[derive(Clone, Default)]
pub struct CliOverrides {
    pub ip_address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for CliOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliOverrides")
            .field("ip_address", &self.ip_address)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Effective settings: CLI flags, then env vars, then config.toml, then defaults.
#[derive(Clone)]
pub struct Settings {
    pub ip_address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub blocklist_file: PathBuf,
    pub hosts_file: PathBuf,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn resolve(cli: CliOverrides, config: Config) -> Self {
        let hosts_file = env_path("LAPTOP_BRICK_HOSTS_FILE")
            .or(config.hosts_file)
            .unwrap_or_else(crate::platform::default_hosts_path);
        let blocklist_file = env_path("LAPTOP_BRICK_BLOCKLIST")
            .or(config.blocklist)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BLOCKLIST));
        // Zero would spin the watcher; fall back to the default.
        let poll_interval = Duration::from_secs(
            config
                .poll_interval_secs
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        );

        Self {
            ip_address: cli.ip_address.or(config.ip_address),
            username: cli.username.or(config.username),
            password: cli.password.or(config.password),
            blocklist_file,
            hosts_file,
            poll_interval,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("ip_address", &self.ip_address)
            .field("username", &self.username)
            .field("blocklist_file", &self.blocklist_file)
            .field("hosts_file", &self.hosts_file)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
