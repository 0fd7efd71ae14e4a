//! Account-level verdict: profile score plus post-set rules, per-post verdicts, metrics.

use crate::config::Config;
use crate::post;
use crate::profile;
use crate::recommend::recommend;
use crate::stats;
use crate::types::*;

/// Evaluate one account and its posts (caller order, not re-sorted).
pub fn evaluate(account: &AccountRecord, posts: &[PostRecord], config: &Config) -> AccountVerdict {
  let profile_result = profile::score(account);

  let combined = score_view_consistency(profile_result.clone(), posts);
  let combined = score_followers_per_post(combined, account);
  let bot_probability = combined.clamped();

  let post_analyses: Vec<PostVerdict> = posts
    .iter()
    .take(config.max_analyzed_posts)
    .map(|p| post::score(p, config))
    .collect();

  let metrics = AccountMetrics {
    followers: account.follower_count,
    following: account.following_count,
    posts: reported_post_count(account, posts),
    likes: account.total_like_count,
    follower_ratio: stats::follower_ratio(account.follower_count, account.following_count),
    engagement_rate: stats::overall_engagement_rate(posts),
  };

  let recommendation = recommend(bot_probability, &post_analyses);
  let display_name = if account.display_name.is_empty() {
    account.handle.clone()
  } else {
    account.display_name.clone()
  };

  tracing::debug!(
    handle = %account.handle,
    profile_score = profile_result.score,
    bot_probability,
    posts = posts.len(),
    analyzed = post_analyses.len(),
    "account evaluated"
  );

  AccountVerdict {
    platform: config.platform.clone(),
    username: account.handle.clone(),
    display_name,
    analysis_id: analysis_id(account, posts),
    analysis: Analysis {
      bot_probability,
      risk_level: Some(RiskTier::from_score(bot_probability)),
      flags: combined.flags,
      recommendation,
      metrics,
      account_analysis: AccountAnalysis {
        score: profile_result.clamped(),
        indicators: profile_result.indicators,
        flags: profile_result.flags,
      },
      post_analyses,
    },
  }
}

/// Profile post count, or the number of posts supplied when the profile reports none.
fn reported_post_count(account: &AccountRecord, posts: &[PostRecord]) -> u64 {
  if account.post_count > 0 {
    account.post_count
  } else {
    posts.len() as u64
  }
}

/// +15 when view counts across all posts vary wildly (cv > 5).
fn score_view_consistency(result: ScoreResult, posts: &[PostRecord]) -> ScoreResult {
  let inconsistent = stats::view_count_cv(posts).is_some_and(|cv| cv > 5.0);
  result.hit_if(inconsistent, 15, "Highly inconsistent view counts")
}

/// +20 when the audience is implausibly large for the number of posts.
fn score_followers_per_post(result: ScoreResult, account: &AccountRecord) -> ScoreResult {
  let unrealistic = account.post_count > 0
    && account.follower_count as f64 / account.post_count as f64 > 10_000.0;
  result.hit_if(unrealistic, 20, "Unrealistic follower-to-video ratio")
}

/// Stable id: hash of every field of the account and each post, in order.
fn analysis_id(account: &AccountRecord, posts: &[PostRecord]) -> String {
  let mut hasher = blake3::Hasher::new();
  hash_str(&mut hasher, &account.handle);
  hash_str(&mut hasher, &account.display_name);
  hash_str(&mut hasher, &account.bio);
  for n in [
    account.follower_count,
    account.following_count,
    account.post_count,
    account.total_like_count,
  ] {
    hasher.update(&n.to_le_bytes());
  }
  hasher.update(&[account.verified as u8, account.has_profile_image as u8]);

  hasher.update(&(posts.len() as u64).to_le_bytes());
  for p in posts {
    hash_str(&mut hasher, &p.id);
    hash_str(&mut hasher, &p.description);
    match p.created_at {
      Some(t) => {
        hasher.update(&[1u8]);
        hasher.update(&t.to_le_bytes());
      }
      None => {
        hasher.update(&[0u8]);
      }
    }
    for n in [p.view_count, p.like_count, p.comment_count, p.share_count] {
      hasher.update(&n.to_le_bytes());
    }
  }
  let hex = hasher.finalize().to_hex();
  format!("ana-{}", &hex[..16])
}

/// Length-prefixed so adjacent strings cannot run into each other.
fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
  hasher.update(&(s.len() as u64).to_le_bytes());
  hasher.update(s.as_bytes());
}
