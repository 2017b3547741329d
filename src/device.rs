//! Smart plug access: the on/off signal the watcher polls.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tapo::{ApiClient, PlugEnergyMonitoringHandler};

use crate::config::Settings;

/// Something that reports a single on/off state.
#[async_trait]
pub trait PowerSource: Send + Sync {
    /// Read the current power state.
    async fn is_on(&self) -> Result<bool>;
}

/// Address and credentials for a Tapo plug.
#[derive(Clone)]
pub struct PlugTarget {
    pub ip_address: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for PlugTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlugTarget")
            .field("ip_address", &self.ip_address)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl PlugTarget {
    /// Take address and credentials from settings; all three are required.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let ip_address = settings
            .ip_address
            .clone()
            .context("no device address: pass --ip-address or set ip_address in config.toml")?;
        let username = settings
            .username
            .clone()
            .context("no Tapo username: pass --username or set username in config.toml")?;
        let password = settings
            .password
            .clone()
            .context("no Tapo password: pass --password or set password in config.toml")?;
        Ok(Self {
            ip_address,
            username,
            password,
        })
    }
}

/// Tapo P110 plug reached through the vendor API.
pub struct TapoPlug {
    handler: PlugEnergyMonitoringHandler,
}

impl TapoPlug {
    /// Authenticate and open a session with the plug.
    pub async fn connect(target: &PlugTarget) -> Result<Self> {
        let handler = ApiClient::new(target.username.clone(), target.password.clone())
            .p110(target.ip_address.clone())
            .await
            .with_context(|| format!("connect to Tapo plug at {}", target.ip_address))?;
        Ok(Self { handler })
    }
}

#[async_trait]
impl PowerSource for TapoPlug {
    async fn is_on(&self) -> Result<bool> {
        let info = self
            .handler
            .get_device_info()
            .await
            .context("read Tapo device info")?;
        Ok(info.device_on)
    }
}
