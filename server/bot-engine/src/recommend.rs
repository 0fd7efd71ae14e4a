//! Recommendation sentence from the account tier and elevated post count.

use crate::types::{PostVerdict, RiskTier};

/// Base sentence per tier, then a suffix when any post is High or Critical.
pub fn recommend(account_score: u8, posts: &[PostVerdict]) -> String {
  let base = match RiskTier::from_score(account_score) {
    RiskTier::Low => "Account appears legitimate with minimal bot indicators.",
    RiskTier::Medium => "Some suspicious patterns detected. Manual review recommended.",
    RiskTier::High => "Multiple bot indicators present. High risk — recommend rejection.",
    RiskTier::Critical => {
      "Strong bot indicators detected. Account likely fake — immediate rejection recommended."
    }
  };

  let elevated = posts.iter().filter(|p| p.risk_level.is_elevated()).count();
  if elevated > 0 {
    format!(
      "{} Additionally, {} individual post(s) show high bot activity.",
      base, elevated
    )
  } else {
    base.to_string()
  }
}
