//! HTTP handlers for the bot detection service.

use axum::{extract::State, Json};
use bot_engine::normalize::clean_handle;
use bot_engine::AccountVerdict;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::state::AppState;
use crate::types::AnalyzeRequest;

pub async fn health() -> &'static str {
  "ok"
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AccountVerdict>, ServiceError> {
  let handle = clean_handle(payload.username.as_deref().unwrap_or_default());
  if handle.is_empty() {
    warn!("analyze: missing username");
    return Err(ServiceError::MissingHandle);
  }

  let verdict = match state.fetch(&handle).await {
    Ok((account, posts)) => state.engine.evaluate(&account, &posts),
    Err(e) if e.is_fetch_failure() => {
      warn!(handle = %handle, error = %e, "analyze: fetch failed, returning unavailable verdict");
      AccountVerdict::unavailable(&state.engine.config().platform, &handle, &e.to_string())
    }
    Err(e) => return Err(e),
  };

  info!(
    handle = %handle,
    bot_probability = verdict.analysis.bot_probability,
    posts = verdict.analysis.post_analyses.len(),
    "analyze: done"
  );
  Ok(Json(verdict))
}
