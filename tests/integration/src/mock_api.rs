//! In-memory mock of the community REST API
//!
//! Serves the post listing and the comment endpoints from seeded data,
//! records every request, and can be told to fail or stall specific pages.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;
use feed_client::models::{
    CommentModel, DataResponse, ErrorBody, ListResponse, PaginationModel, PostModel,
    UpdateCommentBody,
};
use feed_core::EntityId;
use parking_lot::Mutex;
use serde::Deserialize;

use crate::fixtures::user_model;

/// Bearer token the mock accepts for mutations
pub const TEST_TOKEN: &str = "test-token";

/// A request as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
}

/// Behaviour injected into the listing for one cursor (`None` = first page)
#[derive(Debug, Clone)]
pub enum ListingFault {
    Fail { status: StatusCode, message: String },
    Delay(Duration),
}

#[derive(Default)]
struct MockData {
    posts: Vec<PostModel>,
    comments: Vec<CommentModel>,
    requests: Vec<RecordedRequest>,
    faults: HashMap<Option<String>, ListingFault>,
    next_comment_id: i64,
}

/// Shared state of the mock server
#[derive(Clone, Default)]
pub struct MockApi {
    data: Arc<Mutex<MockData>>,
}

impl MockApi {
    pub fn new(posts: Vec<PostModel>, comments: Vec<CommentModel>) -> Self {
        let next_comment_id = comments
            .iter()
            .map(|c| c.id.into_inner())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            data: Arc::new(Mutex::new(MockData {
                posts,
                comments,
                next_comment_id,
                ..MockData::default()
            })),
        }
    }

    /// Axum router serving the API under `/api/v1`
    pub fn router(&self) -> Router {
        let api = Router::new()
            .route("/posts", get(list_posts))
            .route(
                "/posts/:post_id/comments",
                get(list_comments).post(create_comment),
            )
            .route("/comments/:comment_id", patch(update_comment).delete(delete_comment))
            .with_state(self.clone());

        Router::new().nest("/api/v1", api)
    }

    /// Inject a fault for the page starting at `cursor`
    pub fn set_fault(&self, cursor: Option<&str>, fault: ListingFault) {
        self.data
            .lock()
            .faults
            .insert(cursor.map(str::to_string), fault);
    }

    pub fn clear_faults(&self) {
        self.data.lock().faults.clear();
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.data.lock().requests.clone()
    }

    /// Requests matching a method and path
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn comments(&self) -> Vec<CommentModel> {
        self.data.lock().comments.clone()
    }

    fn record(&self, method: Method, path: String, query: HashMap<String, String>) {
        self.data.lock().requests.push(RecordedRequest {
            method,
            path,
            query,
        });
    }
}

fn error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TEST_TOKEN}"))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    sort: Option<String>,
    limit: Option<usize>,
    cursor: Option<String>,
}

fn matches_search(post: &PostModel, search: &str) -> bool {
    let needle = search.to_lowercase();
    post.title.to_lowercase().contains(&needle)
        || post.tags.iter().any(|tag| tag.to_lowercase() == needle)
}

async fn list_posts(
    State(api): State<MockApi>,
    Query(raw): Query<HashMap<String, String>>,
    Query(query): Query<ListQuery>,
) -> Response {
    api.record(Method::GET, "/posts".to_string(), raw);

    let fault = api.data.lock().faults.get(&query.cursor).cloned();
    match fault {
        Some(ListingFault::Fail { status, message }) => {
            return error(status, "INJECTED", &message);
        }
        Some(ListingFault::Delay(delay)) => tokio::time::sleep(delay).await,
        None => {}
    }

    let mut posts: Vec<PostModel> = {
        let data = api.data.lock();
        data.posts
            .iter()
            .filter(|post| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |search| matches_search(post, search))
            })
            .cloned()
            .collect()
    };

    match query.sort.as_deref().unwrap_or("newest") {
        "oldest" => posts.sort_by_key(|p| p.created_at),
        "popular" => posts.sort_by_key(|p| std::cmp::Reverse(p.claps.len())),
        "most_commented" => posts.sort_by_key(|p| std::cmp::Reverse(p.comments.len())),
        _ => posts.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
    }

    let offset = match query.cursor.as_deref().map(str::parse::<usize>) {
        None => 0,
        Some(Ok(offset)) => offset,
        Some(Err(_)) => return error(StatusCode::BAD_REQUEST, "INVALID_CURSOR", "Bad cursor"),
    };
    let limit = query.limit.unwrap_or(10).max(1);
    let total = posts.len();
    let end = (offset + limit).min(total);
    let has_more = end < total;

    Json(ListResponse {
        data: posts.get(offset..end).map(<[_]>::to_vec).unwrap_or_default(),
        pagination: Some(PaginationModel {
            next_cursor: has_more.then(|| end.to_string()),
            has_more,
            total: Some(total as u64),
        }),
    })
    .into_response()
}

async fn list_comments(State(api): State<MockApi>, Path(post_id): Path<i64>) -> Response {
    api.record(Method::GET, format!("/posts/{post_id}/comments"), HashMap::new());

    let comments: Vec<CommentModel> = api
        .data
        .lock()
        .comments
        .iter()
        .filter(|c| c.post_id == EntityId::new(post_id))
        .cloned()
        .collect();

    Json(ListResponse {
        data: comments,
        pagination: None,
    })
    .into_response()
}

#[derive(Debug, Deserialize)]
struct CreateCommentBody {
    content: String,
    #[serde(default)]
    reply_to: Option<EntityId>,
}

async fn create_comment(
    State(api): State<MockApi>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<CreateCommentBody>,
) -> Response {
    api.record(Method::POST, format!("/posts/{post_id}/comments"), HashMap::new());

    if !is_authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Sign in first");
    }
    if body.content.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Content is required");
    }

    let mut data = api.data.lock();
    if let Some(parent) = body.reply_to {
        if !data.comments.iter().any(|c| c.id == parent) {
            return error(StatusCode::NOT_FOUND, "UNKNOWN_COMMENT", "Parent comment not found");
        }
    }

    let now = Utc::now();
    let comment = CommentModel {
        id: EntityId::new(data.next_comment_id),
        post_id: EntityId::new(post_id),
        user: user_model(5, "ada"),
        content: body.content,
        created_at: now,
        updated_at: now,
    };
    data.next_comment_id += 1;
    data.comments.push(comment.clone());

    (StatusCode::CREATED, Json(DataResponse { data: comment })).into_response()
}

async fn update_comment(
    State(api): State<MockApi>,
    Path(comment_id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<UpdateCommentBody>,
) -> Response {
    api.record(Method::PATCH, format!("/comments/{comment_id}"), HashMap::new());

    if !is_authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Sign in first");
    }

    let mut data = api.data.lock();
    let Some(comment) = data
        .comments
        .iter_mut()
        .find(|c| c.id == EntityId::new(comment_id))
    else {
        return error(StatusCode::NOT_FOUND, "UNKNOWN_COMMENT", "Comment not found");
    };

    comment.content = body.content;
    comment.updated_at = comment.created_at + chrono::Duration::days(1);

    Json(DataResponse {
        data: comment.clone(),
    })
    .into_response()
}

async fn delete_comment(
    State(api): State<MockApi>,
    Path(comment_id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    api.record(Method::DELETE, format!("/comments/{comment_id}"), HashMap::new());

    if !is_authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Sign in first");
    }

    let mut data = api.data.lock();
    let before = data.comments.len();
    data.comments.retain(|c| c.id != EntityId::new(comment_id));
    if data.comments.len() == before {
        return error(StatusCode::NOT_FOUND, "UNKNOWN_COMMENT", "Comment not found");
    }

    StatusCode::NO_CONTENT.into_response()
}
