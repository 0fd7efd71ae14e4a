//! Account-level bot indicators derived from profile shape and follower counts.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{AccountRecord, Indicator, ScoreResult};

static NUMERIC_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4,}$").unwrap());

/// Score one account. Rules run in a fixed order; the raw total is returned unclamped.
pub fn score(account: &AccountRecord) -> ScoreResult {
  let result = ScoreResult::new();
  let result = score_handle(result, &account.handle);
  let result = score_bio(result, &account.bio);
  let result = score_follow_ratio(result, account.follower_count, account.following_count);
  score_profile_completeness(result, account)
}

fn score_handle(result: ScoreResult, handle: &str) -> ScoreResult {
  let mut result = result;
  if NUMERIC_SUFFIX.is_match(handle) {
    result = result.hit_tagged(
      20,
      "Suspicious username pattern (4+ numbers at end)",
      Indicator::NumericSuffix,
    );
  }
  if handle.chars().count() < 3 {
    result = result.hit_tagged(15, "Very short username", Indicator::ShortUsername);
  }
  result
}

fn score_bio(result: ScoreResult, bio: &str) -> ScoreResult {
  if bio.chars().count() < 5 {
    result.hit_tagged(15, "Missing or minimal bio", Indicator::MinimalBio)
  } else {
    result
  }
}

fn score_follow_ratio(result: ScoreResult, followers: u64, following: u64) -> ScoreResult {
  if following == 0 {
    return result;
  }
  let ratio = followers as f64 / following as f64;
  if ratio > 50.0 && followers > 10_000 {
    result.hit_tagged(
      25,
      "Extremely high follower-to-following ratio",
      Indicator::HighFollowerRatio,
    )
  } else if ratio < 0.1 && followers > 1_000 {
    result.hit_tagged(
      20,
      "Low follower-to-following ratio for account size",
      Indicator::LowFollowerRatio,
    )
  } else {
    result
  }
}

fn score_profile_completeness(result: ScoreResult, account: &AccountRecord) -> ScoreResult {
  result
    .hit_if(
      !account.verified && account.follower_count > 100_000,
      10,
      "High follower count but not verified",
    )
    .hit_if(
      !account.has_profile_image,
      10,
      "Missing or default profile picture",
    )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn clean_account() -> AccountRecord {
    AccountRecord {
      handle: "real_creator".into(),
      display_name: "Real Creator".into(),
      bio: "Cooking videos every Sunday".into(),
      follower_count: 5_000,
      following_count: 300,
      post_count: 120,
      total_like_count: 80_000,
      verified: false,
      has_profile_image: true,
    }
  }

  #[test]
  fn clean_account_scores_zero() {
    let r = score(&clean_account());
    assert_eq!(r.score, 0);
    assert!(r.flags.is_empty());
    assert!(r.indicators.is_empty());
  }

  #[test]
  fn numeric_suffix_needs_four_trailing_digits() {
    let mut a = clean_account();
    a.handle = "user123".into();
    assert_eq!(score(&a).score, 0);

    a.handle = "user1234".into();
    let r = score(&a);
    assert_eq!(r.score, 20);
    assert_eq!(r.indicators, vec![Indicator::NumericSuffix]);

    a.handle = "1234user".into();
    assert_eq!(score(&a).score, 0);
  }

  #[test]
  fn short_handle_and_short_bio() {
    let mut a = clean_account();
    a.handle = "ab".into();
    a.bio = "hi".into();
    let r = score(&a);
    assert_eq!(r.score, 30);
    assert_eq!(
      r.indicators,
      vec![Indicator::ShortUsername, Indicator::MinimalBio]
    );
    assert_eq!(r.flags.len(), 2);
  }

  #[test]
  fn handle_of_exactly_three_chars_is_fine() {
    let mut a = clean_account();
    a.handle = "abc".into();
    assert_eq!(score(&a).score, 0);
  }

  #[test]
  fn bio_of_exactly_five_chars_is_fine() {
    let mut a = clean_account();
    a.bio = "hello".into();
    assert_eq!(score(&a).score, 0);
  }

  #[test]
  fn high_ratio_requires_large_audience() {
    let mut a = clean_account();
    a.follower_count = 10_000;
    a.following_count = 10;
    // Ratio 1000 but followers not above 10,000.
    assert_eq!(score(&a).score, 0);

    a.follower_count = 10_001;
    let r = score(&a);
    assert_eq!(r.score, 25);
    assert_eq!(r.indicators, vec![Indicator::HighFollowerRatio]);
  }

  #[test]
  fn low_ratio_fires_for_mass_followers() {
    let mut a = clean_account();
    a.follower_count = 1_500;
    a.following_count = 20_000;
    let r = score(&a);
    assert_eq!(r.score, 20);
    assert_eq!(r.indicators, vec![Indicator::LowFollowerRatio]);
  }

  #[test]
  fn zero_following_skips_ratio_rules() {
    let mut a = clean_account();
    a.follower_count = 50_000;
    a.following_count = 0;
    assert_eq!(score(&a).score, 0);
  }

  #[test]
  fn unverified_large_account_and_missing_avatar_have_no_indicator() {
    let mut a = clean_account();
    a.follower_count = 200_000;
    a.following_count = 10_000;
    a.has_profile_image = false;
    let r = score(&a);
    assert_eq!(r.score, 20);
    assert_eq!(r.flags.len(), 2);
    assert!(r.indicators.is_empty());
  }

  #[test]
  fn bot_like_account_scenario() {
    let a = AccountRecord {
      handle: "bot1234".into(),
      bio: String::new(),
      follower_count: 500_000,
      following_count: 100,
      verified: false,
      has_profile_image: true,
      ..AccountRecord::default()
    };
    let r = score(&a);
    assert_eq!(r.score, 70);
    assert_eq!(r.flags.len(), 4);
  }
}
