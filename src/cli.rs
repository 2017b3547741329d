//! CLI definition and startup.

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::{BrickPaths, CliOverrides, Config, Settings};
use crate::device::{PlugTarget, TapoPlug};

#[derive(Parser)]
#[command(name = "laptop-brick")]
#[command(version)]
#[command(about = "Monitor TP-Link Tapo plug state and manage hosts file")]
pub struct Cli {
    /// IP address of the Tapo plug
    #[arg(long = "ip-address", alias = "ip_address")]
    pub ip_address: Option<String>,

    /// Tapo account username
    #[arg(long)]
    pub username: Option<String>,

    /// Tapo account password
    #[arg(long)]
    pub password: Option<String>,
}

impl Cli {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            ip_address: self.ip_address,
            username: self.username,
            password: self.password,
        }
    }
}

/// Parse arguments, check privileges, then monitor the plug until Ctrl+C.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init();

    let paths = BrickPaths::default_paths();
    let config = Config::load(&paths)?;
    let settings = Settings::resolve(cli.overrides(), config);

    if !crate::platform::has_hosts_write_access(&settings.hosts_file) {
        anyhow::bail!(
            "this program needs root privileges to modify {}; please run with sudo",
            settings.hosts_file.display()
        );
    }

    let target = PlugTarget::from_settings(&settings)?;
    let flusher = crate::platform::default_dns_flusher();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let plug = TapoPlug::connect(&target).await?;
        info!("Connected to device at {}", target.ip_address);
        info!("Monitoring device state. Press Ctrl+C to exit.");

        let shutdown = CancellationToken::new();
        let on_signal = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "cannot listen for Ctrl+C");
                return;
            }
            on_signal.cancel();
        });

        crate::monitor::monitor_plug(&settings, &plug, flusher.as_ref(), shutdown).await
    })
}
