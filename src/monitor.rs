//! Ties the watcher to the hosts patcher.

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::device::PowerSource;
use crate::platform::DnsFlusher;
use crate::watcher::Watcher;

/// Watch `source` and keep the hosts file's managed block in sync with it.
///
/// The blocklist is read once up front; a read failure is fatal. Hosts file
/// errors are logged and the watch continues.
pub async fn monitor_plug(
    settings: &Settings,
    source: &dyn PowerSource,
    flusher: &dyn DnsFlusher,
    shutdown: CancellationToken,
) -> Result<()> {
    let blocklist = crate::blocklist::read_blocklist(&settings.blocklist_file)?;
    info!(
        count = blocklist.len(),
        "Will block these URLs when plug is on:\n{}",
        blocklist.join("\n")
    );

    let hosts_file = settings.hosts_file.as_path();
    debug!(path = %hosts_file.display(), "managing hosts file");

    let watcher = Watcher::new(settings.poll_interval).with_cancellation(shutdown);
    watcher
        .run(source, |should_block| {
            if let Err(e) = crate::hosts::patch(hosts_file, should_block, &blocklist, flusher) {
                error!(error = %e, "Error updating hosts file");
            }
        })
        .await
}
