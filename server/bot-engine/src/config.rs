//! Engine configuration with sane defaults.

use chrono::{FixedOffset, Offset, Utc};

/// Tunables that shape the verdict without changing any rule threshold.
#[derive(Debug, Clone)]
pub struct Config {
  /// Platform label echoed in every verdict.
  pub platform: String,
  /// Max posts (in caller order) that get an individual verdict.
  pub max_analyzed_posts: usize,
  /// Post titles longer than this many characters are cut and suffixed with "...".
  pub title_max_chars: usize,
  /// Offset used for the hour-of-day rule and rendered upload times.
  pub utc_offset: FixedOffset,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      platform: "tiktok".to_string(),
      max_analyzed_posts: 10,
      title_max_chars: 50,
      utc_offset: Utc.fix(),
    }
  }
}

impl Config {
  /// Build the offset from seconds east of UTC; `None` when out of range (±24h).
  pub fn with_utc_offset_secs(self, secs: i32) -> Option<Self> {
    let utc_offset = FixedOffset::east_opt(secs)?;
    Some(Self { utc_offset, ..self })
  }
}
