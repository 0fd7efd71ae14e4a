//! Upstream platform payloads and their mapping into engine records.

use bot_engine::{AccountRecord, PostRecord};
use serde::{Deserialize, Deserializer};

/// Profile object as served by the upstream data service. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUser {
  pub unique_id: String,
  pub nickname: String,
  pub signature: String,
  pub follower_count: u64,
  pub following_count: u64,
  pub video_count: u64,
  pub heart_count: u64,
  pub verified: bool,
  pub avatar_larger: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawVideoPage {
  pub videos: Vec<RawVideo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVideo {
  #[serde(deserialize_with = "string_or_number")]
  pub id: String,
  pub desc: String,
  pub create_time: i64,
  pub stats: RawVideoStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVideoStats {
  pub play_count: u64,
  pub digg_count: u64,
  pub comment_count: u64,
  pub share_count: u64,
}

/// Map upstream payloads into engine records; `requested` backs a missing handle.
pub fn into_records(
  user: RawUser,
  videos: Vec<RawVideo>,
  requested: &str,
) -> (AccountRecord, Vec<PostRecord>) {
  let handle = if user.unique_id.is_empty() {
    requested.to_string()
  } else {
    bot_engine::normalize::clean_handle(&user.unique_id)
  };

  let account = AccountRecord {
    display_name: if user.nickname.is_empty() {
      handle.clone()
    } else {
      user.nickname
    },
    handle,
    bio: user.signature,
    follower_count: user.follower_count,
    following_count: user.following_count,
    post_count: user.video_count,
    total_like_count: user.heart_count,
    verified: user.verified,
    has_profile_image: user.avatar_larger.is_some_and(|url| !url.trim().is_empty()),
  };

  let posts = videos
    .into_iter()
    .map(|v| PostRecord {
      id: v.id,
      description: v.desc,
      created_at: Some(v.create_time).filter(|&t| t != 0),
      view_count: v.stats.play_count,
      like_count: v.stats.digg_count,
      comment_count: v.stats.comment_count,
      share_count: v.stats.share_count,
    })
    .collect();

  (account, posts)
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Id {
    Text(String),
    Number(u64),
  }
  Ok(match Id::deserialize(d)? {
    Id::Text(s) => s,
    Id::Number(n) => n.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_platform_fields() {
    let user: RawUser = serde_json::from_str(
      r#"{
        "uniqueId": "creator",
        "nickname": "The Creator",
        "signature": "hello world",
        "followerCount": 1200,
        "followingCount": 300,
        "videoCount": 45,
        "heartCount": 9000,
        "verified": true,
        "avatarLarger": "https://cdn.example/avatar.jpg"
      }"#,
    )
    .unwrap();
    let page: RawVideoPage = serde_json::from_str(
      r#"{"videos": [
        {"id": 7311, "desc": "clip #fun", "createTime": 1741608000,
         "stats": {"playCount": 900, "diggCount": 80, "commentCount": 4, "shareCount": 2}},
        {"id": "abc", "createTime": 0}
      ]}"#,
    )
    .unwrap();

    let (account, posts) = into_records(user, page.videos, "creator");
    assert_eq!(account.handle, "creator");
    assert_eq!(account.display_name, "The Creator");
    assert_eq!(account.bio, "hello world");
    assert_eq!(account.post_count, 45);
    assert_eq!(account.total_like_count, 9000);
    assert!(account.verified);
    assert!(account.has_profile_image);

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "7311");
    assert_eq!(posts[0].view_count, 900);
    assert_eq!(posts[0].like_count, 80);
    assert_eq!(posts[0].created_at, Some(1741608000));
    assert_eq!(posts[1].id, "abc");
    assert_eq!(posts[1].created_at, None);
    assert!(posts[1].description.is_empty());
  }

  #[test]
  fn empty_payload_falls_back_to_requested_handle() {
    let user: RawUser = serde_json::from_str("{}").unwrap();
    let (account, posts) = into_records(user, Vec::new(), "someone");
    assert_eq!(account.handle, "someone");
    assert_eq!(account.display_name, "someone");
    assert!(!account.has_profile_image);
    assert!(posts.is_empty());
  }

  #[test]
  fn blank_avatar_counts_as_missing() {
    let user = RawUser {
      avatar_larger: Some("  ".into()),
      ..RawUser::default()
    };
    let (account, _) = into_records(user, Vec::new(), "x_user");
    assert!(!account.has_profile_image);
  }
}
