use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the static host reads at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfigInner {
    pub server: ServerConfig,
}

/// Handle over [`HostConfigInner`]: clones share one allocation, so the
/// config can be passed around by value. Mutation copies on write.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct HostConfig {
    #[serde(flatten, default)]
    inner: Arc<HostConfigInner>,
}

impl Deref for HostConfig {
    type Target = HostConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HostConfig {
    fn deref_mut(&mut self) -> &mut HostConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Listener settings plus where the compiled bundle lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Directory holding the built web bundle (`index.html` plus hashed assets).
    pub dist: PathBuf,
    /// Emit per-request traces.
    pub request_logs: bool,
    pub ssl: Option<SslConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4173,
            dist: "dist".into(),
            request_logs: true,
            ssl: None,
        }
    }
}

/// Certificate and key locations; presence of the section enables HTTPS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: "cert.pem".into(), key: "key.pem".into() }
    }
}
