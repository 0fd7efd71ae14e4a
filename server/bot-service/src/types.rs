//! Request/response types for the service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
  #[serde(default)]
  pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
    }
  }
}
