//! Bot Probability Engine: deterministic, rule-based scoring of social accounts.
//!
//! Scores an account profile and its recent posts, then combines both into an
//! account verdict: bot probability (0-99), risk tier, flags, per-post
//! verdicts, metrics and a recommendation.
//!
//! No ML, no DB, no network; pure computation over caller-supplied records.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod normalize;
pub mod post;
pub mod profile;
pub mod recommend;
pub mod stats;
pub mod types;

pub use config::Config;
pub use error::EngineError;
pub use types::{AccountRecord, AccountVerdict, EvaluateRequest, PostRecord, RiskTier};

/// Holds configuration; every call is independent of the previous ones.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::default()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Score already-normalized records.
  pub fn evaluate(&self, account: &AccountRecord, posts: &[PostRecord]) -> AccountVerdict {
    aggregate::evaluate(account, posts, &self.config)
  }

  /// Validate a raw request, then score it.
  pub fn process(&self, raw: EvaluateRequest) -> Result<AccountVerdict, EngineError> {
    let (account, posts) = normalize::normalize(raw)?;
    Ok(self.evaluate(&account, &posts))
  }
}
