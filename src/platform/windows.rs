//! Windows platform specifics.

use std::path::Path;

pub const HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

pub const FLUSH_STEPS: &[&[&str]] = &[&["ipconfig", "/flushdns"]];

/// Probe write permission by opening the hosts file for append.
/// Nothing is written; the handle is dropped immediately.
pub fn can_write(hosts_path: &Path) -> bool {
    std::fs::OpenOptions::new()
        .append(true)
        .open(hosts_path)
        .is_ok()
}
