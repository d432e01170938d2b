use anyhow::{Context, Result};
use etherscan_rs::{AppState, config::AppConfig, router};
use std::{io, net::SocketAddr, sync::Once};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "etherscan_rs=debug,tower_http=debug".into());

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

        let result = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();

        if result.is_err() {
            eprintln!("Failed to initialize tracing subscriber");
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let app_config = AppConfig::from_env()?;
    let port = app_config.port;
    let state = AppState::new(app_config).context("Failed to build etherscan client")?;

    tracing::info!("Proxying etherscan API at {}", state.client.base_url());
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTP Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
