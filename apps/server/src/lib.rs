//! # Folio Server
//!
//! A small static host for the portfolio bundle, built on `Axum` and
//! `axum-server`. It serves the compiled site from the `dist` directory with
//! a single page app fallback, and exposes the system health surface.
//!
//! ## Example
//! ```no_run
//! use folio_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4173)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

pub mod router;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use folio::domain::config::HostConfig;
use tokio::signal;
use tracing::{error, info, warn};

/// How long in-flight requests get to finish once a shutdown signal arrives.
const DRAIN_WINDOW: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: HostConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: HostConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Override the directory the compiled bundle is served from.
    pub fn dist(mut self, dist: impl Into<std::path::PathBuf>) -> Self {
        self.cfg.server.dist = dist.into();
        self
    }

    fn validate_tls(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };
        if !ssl.cert.exists() {
            bail!("TLS certificate missing: {}", ssl.cert.display());
        }
        if !ssl.key.exists() {
            bail!("TLS key missing: {}", ssl.key.display());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = ssl.key.metadata()?.permissions().mode();
            if mode & 0o077 != 0 {
                warn!(
                    key = %ssl.key.display(),
                    "TLS key is readable by other users, expected mode 600"
                );
            }
        }
        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Errors
    /// Returns an error if TLS is configured but the certificate or key file
    /// is absent.
    pub fn build(self) -> Result<Server> {
        self.validate_tls()?;

        if !self.cfg.server.dist.is_dir() {
            // Not fatal: the bundle may be produced after the host starts.
            warn!(
                dist = %self.cfg.server.dist.display(),
                "Bundle directory does not exist yet, static requests will fall through to 404"
            );
        }

        Ok(Server { cfg: self.cfg })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    cfg: HostConfig,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the host and serves until a shutdown signal arrives.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the TLS material
    /// cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(
            address = %address,
            tls = self.cfg.server.ssl.is_some(),
            dist = %self.cfg.server.dist.display(),
            features = ?folio::features::ENABLED,
            "Starting server"
        );

        let app = router::init(&self.cfg).into_make_service();

        let handle = axum_server::Handle::<SocketAddr>::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            match shutdown_signal().await {
                Ok(()) => {
                    info!("Shutdown signal received, draining connections");
                    drain.graceful_shutdown(Some(DRAIN_WINDOW));
                }
                Err(err) => error!("Shutdown listener failed: {err}"),
            }
        });

        match &self.cfg.server.ssl {
            Some(tls) => {
                let rustls =
                    axum_server::tls_rustls::RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                        .await
                        .context("Cannot load TLS certificate or key")?;
                info!("Listening on https://{address}");
                axum_server::bind_rustls(address, rustls)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTPS server failed")?;
            }
            None => {
                info!("Listening on http://{address}");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTP server failed")?;
            }
        }

        info!("Server stopped");
        Ok(())
    }

    /// Returns a reference to the host configuration.
    #[must_use]
    pub const fn config(&self) -> &HostConfig {
        &self.cfg
    }
}

/// Resolves when the process receives Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
