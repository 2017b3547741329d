//! Platform abstraction for DNS cache flushing, hosts path and privileges.

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use anyhow::{Context, Result};

/// Trait for invalidating the OS resolver cache after a hosts edit.
pub trait DnsFlusher: Send + Sync {
    /// Flush the DNS cache so hosts changes take effect.
    fn flush(&self) -> Result<()>;
}

/// Get platform DnsFlusher implementation.
/// If LAPTOP_BRICK_SKIP_DNS_FLUSH is set (e.g. in tests), flushing is a no-op.
pub fn default_dns_flusher() -> Box<dyn DnsFlusher> {
    if std::env::var_os("LAPTOP_BRICK_SKIP_DNS_FLUSH").is_some() {
        return Box::new(NoopFlusher);
    }
    #[cfg(unix)]
    return Box::new(CommandFlusher::new(unix::FLUSH_STEPS));

    #[cfg(windows)]
    return Box::new(CommandFlusher::new(windows::FLUSH_STEPS));
}

/// Default hosts file location for this OS.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return PathBuf::from(unix::HOSTS_PATH);

    #[cfg(windows)]
    return PathBuf::from(windows::HOSTS_PATH);
}

/// Whether the current process may rewrite `hosts_path`.
pub fn has_hosts_write_access(hosts_path: &Path) -> bool {
    #[cfg(unix)]
    {
        let _ = hosts_path;
        unix::is_root()
    }

    #[cfg(windows)]
    {
        windows::can_write(hosts_path)
    }
}

/// Runs a fixed sequence of commands, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct CommandFlusher {
    steps: Vec<Vec<String>>,
}

impl CommandFlusher {
    pub fn new(steps: &[&[&str]]) -> Self {
        Self {
            steps: steps
                .iter()
                .map(|argv| argv.iter().map(|a| a.to_string()).collect())
                .collect(),
        }
    }

    pub fn steps(&self) -> &[Vec<String>] {
        &self.steps
    }
}

impl DnsFlusher for CommandFlusher {
    fn flush(&self) -> Result<()> {
        for argv in &self.steps {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let status = Command::new(program)
                .args(args)
                .status()
                .with_context(|| format!("spawn {}", argv.join(" ")))?;
            if !status.success() {
                anyhow::bail!("'{}' failed ({status})", argv.join(" "));
            }
        }
        Ok(())
    }
}

/// DnsFlusher that does nothing.
pub struct NoopFlusher;

impl DnsFlusher for NoopFlusher {
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
