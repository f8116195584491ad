//! Test fixtures and data generators
//!
//! Wire-model builders used to seed the mock API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use feed_client::models::{ClapModel, CommentModel, ImageModel, PostModel, UserModel};
use feed_core::EntityId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter for unique post IDs
static COUNTER: AtomicI64 = AtomicI64::new(1_000);

/// Get a unique ID for test data
pub fn unique_id() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixed reference time so rendered dates are predictable
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn user_model(id: i64, name: &str) -> UserModel {
    UserModel {
        id: EntityId::new(id),
        name: name.to_string(),
        profile_image: None,
    }
}

/// Post created `age_minutes` before the reference time
pub fn post_model(id: i64, title: &str, tags: &[&str], age_minutes: i64) -> PostModel {
    let created_at = epoch() - Duration::minutes(age_minutes);
    PostModel {
        id: EntityId::new(id),
        slug: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        cover_image: None,
        user: user_model(7, "grace"),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        comments: Vec::new(),
        claps: Vec::new(),
        visits: None,
        words: Some(400),
        read_time: "2 min read".to_string(),
        created_at,
        updated_at: created_at,
    }
}

/// `n` posts titled `"{prefix} {i}"`, newest first
pub fn posts(prefix: &str, n: i64) -> Vec<PostModel> {
    (0..n)
        .map(|i| post_model(unique_id(), &format!("{prefix} {i}"), &[], i))
        .collect()
}

/// Post with an avatar, cover image, and one clap
pub fn decorated_post(title: &str) -> PostModel {
    let mut post = post_model(unique_id(), title, &["rust", "async"], 0);
    post.cover_image = Some(ImageModel {
        url: "https://cdn.example.com/cover.png".to_string(),
    });
    post.user.profile_image = Some(ImageModel {
        url: "https://cdn.example.com/grace.png".to_string(),
    });
    post.claps.push(ClapModel {
        id: EntityId::new(unique_id()),
        user_id: EntityId::new(5),
        post_id: post.id,
        created_at: epoch(),
    });
    post.visits = Some(31);
    post
}

pub fn comment_model(id: i64, post_id: i64, content: &str) -> CommentModel {
    CommentModel {
        id: EntityId::new(id),
        post_id: EntityId::new(post_id),
        user: user_model(5, "ada"),
        content: content.to_string(),
        created_at: epoch(),
        updated_at: epoch(),
    }
}
