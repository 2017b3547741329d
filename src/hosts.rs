//! Hosts file patching: one managed block delimited by sentinel lines.
//!
//! Everything before the first line containing [`SENTINEL`] is kept (with
//! trailing whitespace trimmed). The managed block and anything after it are
//! dropped and, when blocking, rewritten at the end of the file.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::HostsError;
use crate::platform::DnsFlusher;

/// Marker line written before and after the managed block.
pub const SENTINEL: &str = "### LAPTOP-BRICK ###";

/// Compute the new hosts content from the current one.
///
/// Any line that merely contains the sentinel also ends the preserved prefix,
/// so a second managed block (or anything after the first marker) is lost.
pub fn render(content: &str, should_block: bool, domains: &[String]) -> String {
    let mut lines: Vec<&str> = content
        .lines()
        .take_while(|line| !line.contains(SENTINEL))
        .map(str::trim_end)
        .collect();

    if should_block {
        lines.push(SENTINEL);
        lines.extend(domains.iter().map(String::as_str));
        lines.push(SENTINEL);
    }

    lines.join("\n")
}

/// Rewrite the hosts file at `path` and flush the DNS cache.
///
/// The file is written and closed before `flusher` runs. A flush failure is
/// logged and does not undo the write.
pub fn patch(
    path: &Path,
    should_block: bool,
    domains: &[String],
    flusher: &dyn DnsFlusher,
) -> Result<(), HostsError> {
    let current = fs::read_to_string(path).map_err(|e| HostsError::from_io(path, e))?;

    if should_block {
        info!("Blocking {} sites...", domains.len());
    }
    let updated = render(&current, should_block, domains);
    fs::write(path, &updated).map_err(|e| HostsError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = updated.len(), "hosts file written");

    if let Err(e) = flusher.flush() {
        warn!(error = %format!("{e:#}"), "DNS cache flush failed");
    }
    Ok(())
}
