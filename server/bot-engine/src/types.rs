//! Core types for the bot engine (JSON contracts + scoring results).

use serde::{Deserialize, Serialize, Serializer};

/// Highest bot probability ever exposed outside the engine.
pub const MAX_SCORE: u8 = 99;

/// Clamp an additive rule total into the exposed [0, 99] range.
pub fn clamp_score(raw: u32) -> u8 {
  raw.min(MAX_SCORE as u32) as u8
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// Normalized account profile. Absent fields default to zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRecord {
  pub handle: String,
  pub display_name: String,
  pub bio: String,
  pub follower_count: u64,
  pub following_count: u64,
  pub post_count: u64,
  pub total_like_count: u64,
  pub verified: bool,
  pub has_profile_image: bool,
}

/// Normalized post. `created_at` is epoch seconds; `None` means unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostRecord {
  pub id: String,
  pub description: String,
  pub created_at: Option<i64>,
  pub view_count: u64,
  pub like_count: u64,
  pub comment_count: u64,
  pub share_count: u64,
}

/// One evaluation request for the stdin binary. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
  pub account: AccountRecord,
  #[serde(default)]
  pub posts: Vec<PostRecord>,
}

// ---------------------------------------------------------------------------
// Scoring results
// ---------------------------------------------------------------------------

/// Categorical tag naming the profile heuristic that raised the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
  NumericSuffix,
  ShortUsername,
  MinimalBio,
  HighFollowerRatio,
  LowFollowerRatio,
}

/// Additive score plus the reasons behind it.
///
/// Values are threaded by move through each rule: a rule that fires returns a
/// new result with its points and exactly one flag appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
  /// Raw rule total; may exceed [`MAX_SCORE`] until clamped.
  pub score: u32,
  pub indicators: Vec<Indicator>,
  pub flags: Vec<String>,
}

impl ScoreResult {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a fired rule that carries no indicator tag.
  pub fn hit(mut self, points: u32, flag: impl Into<String>) -> Self {
    self.score += points;
    self.flags.push(flag.into());
    self
  }

  /// Record a fired rule and its indicator tag.
  pub fn hit_tagged(self, points: u32, flag: impl Into<String>, indicator: Indicator) -> Self {
    let mut out = self.hit(points, flag);
    if !out.indicators.contains(&indicator) {
      out.indicators.push(indicator);
    }
    out
  }

  /// Apply `hit` only when `fired` holds.
  pub fn hit_if(self, fired: bool, points: u32, flag: &str) -> Self {
    if fired {
      self.hit(points, flag)
    } else {
      self
    }
  }

  pub fn clamped(&self) -> u8 {
    clamp_score(self.score)
  }
}

/// Coarse bucket derived from a clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
  Low,
  Medium,
  High,
  Critical,
}

impl RiskTier {
  pub fn from_score(score: u8) -> Self {
    match score {
      0..=29 => Self::Low,
      30..=59 => Self::Medium,
      60..=79 => Self::High,
      _ => Self::Critical,
    }
  }

  /// High and Critical posts count toward the recommendation suffix.
  pub fn is_elevated(self) -> bool {
    matches!(self, Self::High | Self::Critical)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetrics {
  pub views: u64,
  pub likes: u64,
  pub comments: u64,
  pub shares: u64,
  /// Percentage with two decimals and a trailing `%`, e.g. `"4.25%"`.
  pub engagement_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVerdict {
  #[serde(rename = "videoId")]
  pub post_id: String,
  pub title: String,
  pub bot_probability: u8,
  pub risk_level: RiskTier,
  pub flags: Vec<String>,
  pub metrics: PostMetrics,
  pub upload_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetrics {
  pub followers: u64,
  pub following: u64,
  #[serde(rename = "videos")]
  pub posts: u64,
  pub likes: u64,
  pub follower_ratio: f64,
  pub engagement_rate: f64,
}

/// Profile stage on its own, before aggregate rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAnalysis {
  pub score: u8,
  pub indicators: Vec<Indicator>,
  pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
  pub bot_probability: u8,
  /// `None` only for the unavailable verdict; rendered as `"Unknown"`.
  #[serde(serialize_with = "tier_or_unknown")]
  pub risk_level: Option<RiskTier>,
  pub flags: Vec<String>,
  pub recommendation: String,
  pub metrics: AccountMetrics,
  pub account_analysis: AccountAnalysis,
  #[serde(rename = "videoAnalyses")]
  pub post_analyses: Vec<PostVerdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerdict {
  pub platform: String,
  pub username: String,
  pub display_name: String,
  pub analysis_id: String,
  pub analysis: Analysis,
}

impl AccountVerdict {
  /// Well-formed verdict for when upstream data could not be obtained.
  pub fn unavailable(platform: &str, handle: &str, cause: &str) -> Self {
    let handle = handle.trim().trim_start_matches('@');
    Self {
      platform: platform.to_string(),
      username: handle.to_string(),
      display_name: handle.to_string(),
      analysis_id: String::new(),
      analysis: Analysis {
        bot_probability: 0,
        risk_level: None,
        flags: vec![
          format!("Data fetch failed: {}", cause),
          "Retry later for live analysis".to_string(),
        ],
        recommendation: "Unable to analyze due to upstream data issues. Please try again."
          .to_string(),
        metrics: AccountMetrics::default(),
        account_analysis: AccountAnalysis::default(),
        post_analyses: Vec::new(),
      },
    }
  }
}

fn tier_or_unknown<S: Serializer>(tier: &Option<RiskTier>, s: S) -> Result<S::Ok, S::Error> {
  match tier {
    Some(t) => t.serialize(s),
    None => s.serialize_str("Unknown"),
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tier_boundaries_are_exact() {
    assert_eq!(RiskTier::from_score(0), RiskTier::Low);
    assert_eq!(RiskTier::from_score(29), RiskTier::Low);
    assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(59), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(60), RiskTier::High);
    assert_eq!(RiskTier::from_score(79), RiskTier::High);
    assert_eq!(RiskTier::from_score(80), RiskTier::Critical);
    assert_eq!(RiskTier::from_score(99), RiskTier::Critical);
  }

  #[test]
  fn clamp_caps_at_99() {
    assert_eq!(clamp_score(0), 0);
    assert_eq!(clamp_score(99), 99);
    assert_eq!(clamp_score(105), 99);
  }

  #[test]
  fn hits_keep_one_flag_per_rule() {
    let r = ScoreResult::new()
      .hit(10, "a")
      .hit_if(false, 5, "skipped")
      .hit_tagged(20, "b", Indicator::MinimalBio);
    assert_eq!(r.score, 30);
    assert_eq!(r.flags, vec!["a", "b"]);
    assert_eq!(r.indicators, vec![Indicator::MinimalBio]);
  }

  #[test]
  fn indicator_serializes_as_snake_case() {
    let json = serde_json::to_string(&Indicator::HighFollowerRatio).unwrap();
    assert_eq!(json, "\"high_follower_ratio\"");
  }

  #[test]
  fn record_defaults_fill_absent_fields() {
    let account: AccountRecord = serde_json::from_str(r#"{"handle":"abc"}"#).unwrap();
    assert_eq!(account.follower_count, 0);
    assert!(account.bio.is_empty());
    assert!(!account.has_profile_image);

    let post: PostRecord = serde_json::from_str(r#"{"id":"1","viewCount":5}"#).unwrap();
    assert_eq!(post.view_count, 5);
    assert_eq!(post.created_at, None);
  }

  #[test]
  fn unavailable_verdict_renders_unknown_tier() {
    let v = AccountVerdict::unavailable("tiktok", "@someone", "timeout");
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["username"], "someone");
    assert_eq!(json["analysis"]["riskLevel"], "Unknown");
    assert_eq!(json["analysis"]["botProbability"], 0);
    assert!(json["analysis"]["flags"][0]
      .as_str()
      .unwrap()
      .contains("timeout"));
    assert!(json["analysis"]["videoAnalyses"].as_array().unwrap().is_empty());
    assert_eq!(json["analysis"]["metrics"]["videos"], 0);
  }
}
