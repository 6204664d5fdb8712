use anyhow::Context;
use mhs::domain::config::ApiConfig;
use mhs::kernel::config::{config_path, load_config};
use mhs_logger::{Logger, parse_level};
use mhs_server::Server;
use tracing::info;

const CONFIG_FILE: &str = "server";

#[mhs_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some(CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg).context("Failed to initialize logging")?;
    info!(path = %config_path(Some(CONFIG_FILE)).display(), "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(cfg: &ApiConfig) -> anyhow::Result<Logger> {
    let log = &cfg.logging;

    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&log.level)?)
        .json(log.json)
        .max_files(log.max_files);

    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(path) = &log.path {
        builder = builder.path(path);
    }

    Ok(builder.init()?)
}
