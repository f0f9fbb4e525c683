use anyhow::Context;
use folio::kernel::prelude::load_config;
use folio_logger::{FileOutput, Logger};
use folio_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log =
        Logger::builder().name(env!("CARGO_PKG_NAME")).file(FileOutput::new("logs")).init()?;

    let cfg = load_config(Some("config/server")).context("Cannot load server configuration")?;

    Server::builder().config(cfg).build()?.run().await
}
