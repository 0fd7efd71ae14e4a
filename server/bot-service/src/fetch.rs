//! Upstream data fetch over HTTP.

use std::time::Duration;

use bot_engine::{AccountRecord, PostRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ServiceError;
use crate::platform::{self, RawUser, RawVideoPage};

/// Client for the upstream profile/post data service.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: reqwest::Client,
  base_url: String,
  post_limit: usize,
}

impl HttpFetcher {
  pub fn new(base_url: &str, post_limit: usize, timeout: Duration) -> Result<Self, ServiceError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      post_limit,
    })
  }

  pub fn user_url(&self, handle: &str) -> String {
    format!("{}/users/{}", self.base_url, urlencoding::encode(handle))
  }

  pub fn videos_url(&self, handle: &str) -> String {
    format!(
      "{}/users/{}/videos?count={}",
      self.base_url,
      urlencoding::encode(handle),
      self.post_limit
    )
  }

  /// Fetch the profile and its most recent posts as engine records.
  pub async fn fetch(&self, handle: &str) -> Result<(AccountRecord, Vec<PostRecord>), ServiceError> {
    let user: RawUser = self.get_json(&self.user_url(handle)).await?;
    let page: RawVideoPage = self.get_json(&self.videos_url(handle)).await?;
    debug!(handle, videos = page.videos.len(), "upstream data fetched");

    let mut videos = page.videos;
    videos.truncate(self.post_limit);
    Ok(platform::into_records(user, videos, handle))
  }

  async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
    let resp = self.client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(ServiceError::UpstreamStatus(status.as_u16()));
    }
    Ok(resp.json::<T>().await?)
  }
}
