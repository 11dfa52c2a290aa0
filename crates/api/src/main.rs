//! EventReg server binary

use std::sync::Arc;

use anyhow::Context;
use eventreg_api::{create_router, AppContext};
use eventreg_infra::{config, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;
    init_logging(config.logging.format)?;

    let addr = config.server.bind_addr.clone();
    let context = Arc::new(AppContext::new(config).context("failed to initialize services")?);
    let app = create_router(context);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "eventreg listening");

    axum::serve(listener, app).await?;

    Ok(())
}
