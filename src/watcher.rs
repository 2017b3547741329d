//! State watcher: poll a power source and react to changes.

use anyhow::Result;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::device::PowerSource;

/// Human label for a power state.
pub fn state_label(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

/// Polls a [`PowerSource`] at a fixed interval.
///
/// The first reading always fires `on_transition`; after that it fires once
/// per observed change. A poll error ends the watch and is returned.
pub struct Watcher {
    interval: Duration,
    shutdown: CancellationToken,
}

impl Watcher {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Run until cancelled or until the source fails.
    pub async fn run<S, F>(&self, source: &S, mut on_transition: F) -> Result<()>
    where
        S: PowerSource + ?Sized,
        F: FnMut(bool),
    {
        let mut last = tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => return Ok(()),
            state = source.is_on() => state?,
        };
        info!("Initial state: {}", state_label(last));
        on_transition(last);

        loop {
            let current = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                state = source.is_on() => state?,
            };

            if current != last {
                info!("Device is now: {}", state_label(current));
                on_transition(current);
                last = current;
            }

            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Watcher: shutting down");
        Ok(())
    }
}
