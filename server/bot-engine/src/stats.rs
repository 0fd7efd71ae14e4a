//! Summary statistics over a post set: view-count spread and engagement totals.

use crate::post;
use crate::types::PostRecord;

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (divides by n - 1); `None` with fewer than two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
  if values.len() < 2 {
    return None;
  }
  let m = mean(values)?;
  let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
  Some(sum_sq / (values.len() - 1) as f64)
}

/// Coefficient of variation of view counts: sample stddev / mean.
///
/// `None` when there are fewer than two posts or the mean is not positive.
pub fn view_count_cv(posts: &[PostRecord]) -> Option<f64> {
  let views: Vec<f64> = posts.iter().map(|p| p.view_count as f64).collect();
  let m = mean(&views)?;
  if m <= 0.0 {
    return None;
  }
  let variance = sample_variance(&views)?;
  Some(variance.sqrt() / m)
}

/// Overall engagement percentage across every post, rounded to one decimal.
pub fn overall_engagement_rate(posts: &[PostRecord]) -> f64 {
  let (views, engaged) = posts.iter().fold((0u64, 0u64), |(v, e), p| {
    (v.saturating_add(p.view_count), e.saturating_add(post::engaged(p)))
  });
  if views == 0 {
    return 0.0;
  }
  round_to(engaged as f64 / views as f64 * 100.0, 1)
}

/// Followers per followed account; the denominator is floored at 1.
pub fn follower_ratio(followers: u64, following: u64) -> f64 {
  followers as f64 / following.max(1) as f64
}

/// Rounds half away from zero (`f64::round`), so an exact tie such as 0.25 at
/// one decimal becomes 0.3 where banker's rounding would give 0.2.
fn round_to(value: f64, decimals: i32) -> f64 {
  let factor = 10f64.powi(decimals);
  (value * factor).round() / factor
}
