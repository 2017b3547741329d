//! Blocklist loading: one domain per line.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the blocklist at `path`, trimming each line.
///
/// Entries are passed through as-is: no deduplication, no validation, and
/// blank lines are kept as empty entries.
pub fn read_blocklist(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read blocklist: {}", path.display()))?;
    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}
