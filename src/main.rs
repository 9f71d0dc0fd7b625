use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fake_data_api::cli::Cli;
use fake_data_api::runtime_config::RuntimeConfig;
use fake_data_api::server::{AppService, HttpServer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = RuntimeConfig::from_env();
    may::config().set_stack_size(config.stack_size);

    let addr = cli.bind_addr();
    info!(addr = %addr, stack_size = config.stack_size, "starting fake data API server");

    let handle = HttpServer(AppService::new())
        .start(&addr)
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server started at http://{addr}, press Ctrl+C to stop");

    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server coroutine panicked: {e:?}"))?;
    Ok(())
}
