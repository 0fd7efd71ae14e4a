//! Normalize caller-supplied records before scoring.

use crate::error::EngineError;
use crate::types::*;

/// Validate a request and return its records in canonical form.
///
/// - Handle: trimmed, leading `@` removed, must not be empty.
/// - Post `createdAt` of zero becomes unknown.
pub fn normalize(raw: EvaluateRequest) -> Result<(AccountRecord, Vec<PostRecord>), EngineError> {
  let EvaluateRequest { mut account, posts } = raw;

  account.handle = clean_handle(&account.handle);
  if account.handle.is_empty() {
    return Err(EngineError::validation("account.handle", "must not be empty"));
  }

  let posts = posts
    .into_iter()
    .map(|mut p| {
      p.created_at = p.created_at.filter(|&t| t != 0);
      p
    })
    .collect();

  Ok((account, posts))
}

/// Strip surrounding whitespace and one leading `@`.
pub fn clean_handle(handle: &str) -> String {
  let trimmed = handle.trim();
  trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string()
}
