//! Shared test helpers.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// Create a temp directory for hosts files, blocklists and LAPTOP_BRICK_HOME.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("brick_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Run a closure with env var `key` set to `value`, restoring it afterwards.
pub fn with_env<F, R>(key: &str, value: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os(key);
    std::env::set_var(key, value);
    let r = f();
    match prev {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    r
}

/// Owned domain list from string literals.
pub fn domains(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
