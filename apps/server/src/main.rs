use anyhow::Context;
use shub::domain::config::ApiConfig;
use shub::kernel::config::load_config;
use shub_server::{Server, init_logging};

#[shub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;
    let _log = init_logging(&cfg)?;

    Server::builder().config(cfg).build()?.run().await
}
