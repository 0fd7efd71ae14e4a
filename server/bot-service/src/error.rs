//! Service error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::ErrorBody;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("config: {0}")]
  Config(String),

  #[error("Username is required")]
  MissingHandle,

  #[error("upstream not configured")]
  UpstreamNotConfigured,

  #[error("upstream request failed: {0}")]
  Upstream(#[from] reqwest::Error),

  #[error("upstream returned status {0}")]
  UpstreamStatus(u16),
}

impl ServiceError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  /// Failures that the analyze endpoint turns into an unavailable verdict.
  pub fn is_fetch_failure(&self) -> bool {
    matches!(
      self,
      Self::UpstreamNotConfigured | Self::Upstream(_) | Self::UpstreamStatus(_)
    )
  }
}

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    let status = match self {
      Self::MissingHandle => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorBody::new(self.to_string()))).into_response()
  }
}
