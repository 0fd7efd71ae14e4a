//! Binary entrypoint for the bot detection service.

use std::net::SocketAddr;
use std::sync::Arc;

use bot_service::{AppState, Config};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bot_service=info,bot_engine=info".into()),
    )
    .init();

  let config = Config::from_env()?;
  if config.upstream_url.is_none() {
    warn!("UPSTREAM_URL not set; every analysis will return the unavailable verdict");
  }

  let state = Arc::new(AppState::from_config(&config)?);
  let app = bot_service::router(state);

  let addr = SocketAddr::new(config.bind_addr, config.port);
  info!("bot-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
