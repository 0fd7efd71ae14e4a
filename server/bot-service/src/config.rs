//! Service configuration read from the environment.

use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct Config {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// Base URL of the upstream data service; `None` disables fetching.
  pub upstream_url: Option<String>,
  /// Recent posts requested per account.
  pub fetch_post_limit: usize,
  pub upstream_timeout: Duration,
  /// Seconds east of UTC for the engine's hour-of-day rule.
  pub scoring_utc_offset_secs: i32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::from([127, 0, 0, 1]),
      port: 5001,
      upstream_url: None,
      fetch_post_limit: 20,
      upstream_timeout: Duration::from_secs(10),
      scoring_utc_offset_secs: 0,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ServiceError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; unset keys keep their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
    let defaults = Self::default();
    let upstream_url = lookup("UPSTREAM_URL")
      .map(|u| u.trim().trim_end_matches('/').to_string())
      .filter(|u| !u.is_empty());

    Ok(Self {
      bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr)?,
      port: parse_or(&lookup, "PORT", defaults.port)?,
      upstream_url,
      fetch_post_limit: parse_or(&lookup, "FETCH_POST_LIMIT", defaults.fetch_post_limit)?,
      upstream_timeout: Duration::from_secs(parse_or(
        &lookup,
        "UPSTREAM_TIMEOUT_SECS",
        defaults.upstream_timeout.as_secs(),
      )?),
      scoring_utc_offset_secs: parse_or(
        &lookup,
        "SCORING_UTC_OFFSET_SECS",
        defaults.scoring_utc_offset_secs,
      )?,
    })
  }

  pub fn engine_config(&self) -> Result<bot_engine::Config, ServiceError> {
    bot_engine::Config::default()
      .with_utc_offset_secs(self.scoring_utc_offset_secs)
      .ok_or_else(|| {
        ServiceError::config(format!(
          "SCORING_UTC_OFFSET_SECS out of range: {}",
          self.scoring_utc_offset_secs
        ))
      })
  }
}

fn parse_or<T: FromStr>(
  lookup: &impl Fn(&str) -> Option<String>,
  key: &str,
  default: T,
) -> Result<T, ServiceError> {
  match lookup(key) {
    Some(raw) => raw
      .trim()
      .parse()
      .map_err(|_| ServiceError::config(format!("{} must be valid, got {:?}", key, raw))),
    None => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, 5001);
    assert_eq!(cfg.fetch_post_limit, 20);
    assert!(cfg.upstream_url.is_none());
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1");
  }

  #[test]
  fn reads_overrides() {
    let cfg = Config::from_lookup(lookup(&[
      ("PORT", "8080"),
      ("UPSTREAM_URL", "http://data.internal/api/"),
      ("FETCH_POST_LIMIT", "30"),
      ("SCORING_UTC_OFFSET_SECS", "-18000"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url.as_deref(), Some("http://data.internal/api"));
    assert_eq!(cfg.fetch_post_limit, 30);
    assert!(cfg.engine_config().is_ok());
  }

  #[test]
  fn invalid_values_are_reported() {
    let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));

    let cfg = Config::from_lookup(lookup(&[("SCORING_UTC_OFFSET_SECS", "999999")])).unwrap();
    assert!(cfg.engine_config().is_err());
  }
}
