//! Per-post bot indicators: engagement ratios, upload timing, description shape.

use chrono::{DateTime, FixedOffset, Timelike};

use crate::config::Config;
use crate::types::{PostMetrics, PostRecord, PostVerdict, RiskTier, ScoreResult};

/// Score one post and render its verdict.
pub fn score(post: &PostRecord, config: &Config) -> PostVerdict {
  let uploaded = upload_time(post, config.utc_offset);

  let result = score_engagement(ScoreResult::new(), post);
  let result = score_timing(result, uploaded.as_ref());
  let result = score_description(result, &post.description);

  let bot_probability = result.clamped();
  PostVerdict {
    post_id: post.id.clone(),
    title: truncate_title(&post.description, config.title_max_chars),
    bot_probability,
    risk_level: RiskTier::from_score(bot_probability),
    flags: result.flags,
    metrics: PostMetrics {
      views: post.view_count,
      likes: post.like_count,
      comments: post.comment_count,
      shares: post.share_count,
      engagement_rate: engagement_rate(post),
    },
    upload_time: uploaded.map(|t| t.to_rfc3339()),
  }
}

/// Engagement rules; skipped entirely when the post has no views.
fn score_engagement(result: ScoreResult, post: &PostRecord) -> ScoreResult {
  if post.view_count == 0 {
    return result;
  }
  let views = post.view_count as f64;
  let likes = post.like_count;
  let comments = post.comment_count;
  let like_rate = likes as f64 / views;
  let comment_rate = comments as f64 / views;
  let total_rate = engaged(post) as f64 / views;

  result
    .hit_if(total_rate > 0.25, 30, "Unusually high engagement rate (>25%)")
    .hit_if(like_rate > 0.15, 25, "Extremely high like rate")
    .hit_if(
      comment_rate < 0.001 && post.view_count > 10_000,
      20,
      "Very low comment rate for view count",
    )
    .hit_if(
      likes > 0 && comments == 0 && post.view_count > 5_000,
      15,
      "High likes but zero comments (bot pattern)",
    )
    .hit_if(
      likes > 0 && comments > 0 && likes as f64 / comments as f64 > 1000.0,
      15,
      "Unnatural like-to-comment ratio",
    )
}

fn score_timing(result: ScoreResult, uploaded: Option<&DateTime<FixedOffset>>) -> ScoreResult {
  let late_night = uploaded.is_some_and(|t| (2..=5).contains(&t.hour()));
  result.hit_if(late_night, 10, "Posted during typical bot hours (2-5 AM)")
}

fn score_description(result: ScoreResult, desc: &str) -> ScoreResult {
  result
    .hit_if(
      desc.chars().count() < 5,
      10,
      "Minimal or missing description",
    )
    .hit_if(
      !desc.is_empty() && !desc.contains('#'),
      5,
      "No hashtags (unusual for short-form video)",
    )
}

/// Upload time in the configured offset; zero or out-of-range timestamps are unknown.
pub fn upload_time(post: &PostRecord, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
  let secs = post.created_at.filter(|&t| t != 0)?;
  DateTime::from_timestamp(secs, 0).map(|t| t.with_timezone(&offset))
}

/// `"{:.2}%"` of (likes + comments + shares) / max(views, 1).
pub fn engagement_rate(post: &PostRecord) -> String {
  let views = post.view_count.max(1) as f64;
  format!("{:.2}%", engaged(post) as f64 / views * 100.0)
}

/// Likes + comments + shares.
pub fn engaged(post: &PostRecord) -> u64 {
  post
    .like_count
    .saturating_add(post.comment_count)
    .saturating_add(post.share_count)
}

/// First `max_chars` characters plus `...` when longer; shorter text is kept as-is.
pub fn truncate_title(desc: &str, max_chars: usize) -> String {
  match desc.char_indices().nth(max_chars) {
    Some((cut, _)) => format!("{}...", &desc[..cut]),
    None => desc.to_string(),
  }
}
