//! Feed integration tests
//!
//! The HTTP post source, the feed controller, and the renderer run against
//! the in-process mock API.
//!
//! Run with: cargo test -p integration-tests --test feed_tests

use std::time::Duration;

use axum::http::{Method, StatusCode};
use feed_core::{DomainError, Filters, PostSource, SortOrder};
use feed_view::{render_feed, Action, FeedController, FeedStatus, FetchKind, Store};
use integration_tests::{
    decorated_post, eventually, post_model, posts, within, ListingFault, TestServer,
};

// ============================================================================
// Post Source
// ============================================================================

#[tokio::test]
async fn test_post_source_pages_through_listing() {
    let server = TestServer::start(posts("Post", 15), Vec::new()).await.unwrap();
    let source = server.post_source(10).unwrap();

    let first = source.fetch_page(&Filters::default(), None).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, Some(15));
    let cursor = first.next_cursor.clone().expect("second page");

    let second = source
        .fetch_page(&Filters::default(), Some(&cursor))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 5);
    assert!(!second.has_next_page());

    let requests = server.api.requests_to(Method::GET, "/posts");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query.get("sort").map(String::as_str), Some("newest"));
    assert_eq!(requests[0].query.get("limit").map(String::as_str), Some("10"));
    assert!(!requests[0].query.contains_key("cursor"));
    assert!(!requests[0].query.contains_key("search"));
    assert_eq!(requests[1].query.get("cursor"), Some(&"10".to_string()));
}

#[tokio::test]
async fn test_post_source_sends_filters() {
    let seed = vec![
        post_model(1, "Intro to Rust", &[], 30),
        post_model(2, "Cooking pasta", &[], 20),
        post_model(3, "Ownership deep dive", &["rust"], 10),
    ];
    let server = TestServer::start(seed, Vec::new()).await.unwrap();
    let source = server.post_source(10).unwrap();

    let page = source
        .fetch_page(&Filters::new("rust", SortOrder::Oldest), None)
        .await
        .unwrap();

    let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Intro to Rust", "Ownership deep dive"]);

    let request = &server.api.requests_to(Method::GET, "/posts")[0];
    assert_eq!(request.query.get("search"), Some(&"rust".to_string()));
    assert_eq!(request.query.get("sort"), Some(&"oldest".to_string()));
}

#[tokio::test]
async fn test_post_source_maps_server_errors() {
    let server = TestServer::start(posts("Post", 3), Vec::new()).await.unwrap();
    server.api.set_fault(
        None,
        ListingFault::Fail {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Database unavailable".to_string(),
        },
    );
    let source = server.post_source(10).unwrap();

    let err = source.fetch_page(&Filters::default(), None).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::Server {
            status: 503,
            message: "Database unavailable".to_string()
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_overlong_search_never_reaches_the_server() {
    let server = TestServer::start(posts("Post", 3), Vec::new()).await.unwrap();
    let source = server.post_source(10).unwrap();

    let filters = Filters::new("x".repeat(201), SortOrder::Newest);
    let err = source.fetch_page(&filters, None).await.unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(server.api.requests().is_empty());
}

// ============================================================================
// Feed Controller
// ============================================================================

#[tokio::test]
async fn test_feed_loads_pages_until_the_end() {
    let server = TestServer::start(posts("Post", 15), Vec::new()).await.unwrap();
    let feed = FeedController::new(server.post_source(10).unwrap(), Store::default()).spawn();

    let snapshot = within(feed.wait_for(|s| s.status == FeedStatus::Success))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.posts.len(), 10);
    assert!(snapshot.has_next_page);
    assert!(!render_feed(&snapshot).contains_text("Reached the end."));

    feed.sentinel().on_visible();
    let snapshot = within(feed.wait_for(|s| s.posts.len() == 15 && !s.is_loading()))
        .await
        .unwrap()
        .unwrap();
    assert!(!snapshot.has_next_page);

    let titles: Vec<String> = snapshot.posts.iter().map(|p| p.title.clone()).collect();
    let expected: Vec<String> = (0..15).map(|i| format!("Post {i}")).collect();
    assert_eq!(titles, expected);

    let view = render_feed(&snapshot);
    assert!(view.contains_text("Reached the end."));

    // No further page is requested once the end is reached
    feed.on_sentinel_visible();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(server.api.requests_to(Method::GET, "/posts").len(), 2);

    feed.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_while_next_page_in_flight() {
    let mut seed = posts("Cooking", 12);
    seed.push(post_model(1, "Rust lifetimes", &[], 100));
    seed.push(post_model(2, "Async Rust", &["rust"], 101));
    let server = TestServer::start(seed, Vec::new()).await.unwrap();
    server
        .api
        .set_fault(Some("10"), ListingFault::Delay(Duration::from_millis(300)));

    let store = Store::default();
    let feed = FeedController::new(server.post_source(10).unwrap(), store.clone()).spawn();
    within(feed.wait_for(|s| s.posts.len() == 10)).await.unwrap().unwrap();

    feed.on_sentinel_visible();
    let api = server.api.clone();
    eventually(|| {
        api.requests_to(Method::GET, "/posts")
            .iter()
            .any(|r| r.query.contains_key("cursor"))
    })
    .await
    .unwrap();

    store.dispatch(Action::SetSearch("rust".to_string()));

    let snapshot = within(feed.wait_for(|s| {
        s.filters.search == "rust" && s.status == FeedStatus::Success
    }))
    .await
    .unwrap()
    .unwrap();
    let titles: Vec<&str> = snapshot.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust lifetimes", "Async Rust"]);

    // Outlast the stalled page two; it must not leak into the list
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(feed.snapshot(), snapshot);

    let view = render_feed(&snapshot);
    assert!(view.contains_text("Search: rust"));
    assert!(view.contains_text("Initial results: 2"));

    feed.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_next_page_failure_keeps_posts_and_retries() {
    let server = TestServer::start(posts("Post", 15), Vec::new()).await.unwrap();
    server.api.set_fault(
        Some("10"),
        ListingFault::Fail {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Database unavailable".to_string(),
        },
    );

    let feed = FeedController::new(server.post_source(10).unwrap(), Store::default()).spawn();
    within(feed.wait_for(|s| s.posts.len() == 10)).await.unwrap().unwrap();

    feed.on_sentinel_visible();
    let snapshot = within(feed.wait_for(|s| s.is_error())).await.unwrap().unwrap();
    assert_eq!(snapshot.status, FeedStatus::Error(FetchKind::NextPage));
    assert_eq!(snapshot.posts.len(), 10);
    assert!(snapshot.has_next_page);

    let view = render_feed(&snapshot);
    assert!(view.contains_text("Database unavailable"));
    assert!(view.contains_text("Retry"));
    assert!(!view.contains_text("Reached the end."));

    server.api.clear_faults();
    feed.retry();
    let snapshot = within(feed.wait_for(|s| s.posts.len() == 15))
        .await
        .unwrap()
        .unwrap();
    assert!(!snapshot.is_error());
    assert!(!snapshot.has_next_page);

    feed.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sort_change_restarts_from_first_page() {
    let mut popular = decorated_post("Most clapped");
    popular.created_at = popular.created_at - chrono::Duration::days(30);
    let mut seed = posts("Post", 4);
    seed.push(popular);
    let server = TestServer::start(seed, Vec::new()).await.unwrap();

    let store = Store::default();
    let feed = FeedController::new(server.post_source(2).unwrap(), store.clone()).spawn();
    within(feed.wait_for(|s| s.posts.len() == 2)).await.unwrap().unwrap();

    store.dispatch(Action::SetSort(SortOrder::Popular));
    let snapshot = within(feed.wait_for(|s| {
        s.filters.sort == SortOrder::Popular && s.status == FeedStatus::Success
    }))
    .await
    .unwrap()
    .unwrap();

    assert_eq!(snapshot.posts.len(), 2);
    assert_eq!(snapshot.posts[0].title, "Most clapped");

    let last = server.api.requests_to(Method::GET, "/posts").pop().unwrap();
    assert_eq!(last.query.get("sort"), Some(&"popular".to_string()));
    assert!(!last.query.contains_key("cursor"));

    feed.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_listing_renders_empty_state() {
    let server = TestServer::start(Vec::new(), Vec::new()).await.unwrap();
    let feed = FeedController::new(server.post_source(10).unwrap(), Store::default()).spawn();

    let snapshot = within(feed.wait_for(|s| s.status == FeedStatus::Success))
        .await
        .unwrap()
        .unwrap();
    let view = render_feed(&snapshot);
    assert!(view.contains_text("No posts to show."));
    assert!(!view.contains_text("Reached the end."));

    feed.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_shows_banner() {
    // Bind and drop a listener to get a port nothing listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let config = feed_common::ApiConfig::new(format!("http://{addr}/api/v1"));
    let client = feed_client::ApiClient::new(&config).unwrap();
    let source = std::sync::Arc::new(feed_client::HttpPostSource::new(client, 10));

    let feed = FeedController::new(source, Store::default()).spawn();
    let snapshot = within(feed.wait_for(|s| s.is_error())).await.unwrap().unwrap();

    assert!(snapshot.is_first_page_error());
    assert_eq!(
        snapshot.error.as_ref().map(|e| e.message.as_str()),
        Some("Unable to reach the server. Check your connection and try again.")
    );

    feed.shutdown().await.unwrap();
}
