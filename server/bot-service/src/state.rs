//! Shared application state.

use bot_engine::{AccountRecord, Engine, PostRecord};

use crate::config::Config;
use crate::error::ServiceError;
use crate::fetch::HttpFetcher;

pub struct AppState {
  pub engine: Engine,
  pub fetcher: Option<HttpFetcher>,
}

impl AppState {
  pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
    let fetcher = match &config.upstream_url {
      Some(url) => Some(HttpFetcher::new(
        url,
        config.fetch_post_limit,
        config.upstream_timeout,
      )?),
      None => None,
    };
    Ok(Self {
      engine: Engine::new(config.engine_config()?),
      fetcher,
    })
  }

  pub async fn fetch(&self, handle: &str) -> Result<(AccountRecord, Vec<PostRecord>), ServiceError> {
    match &self.fetcher {
      Some(f) => f.fetch(handle).await,
      None => Err(ServiceError::UpstreamNotConfigured),
    }
  }
}
