//! Feed page projection

use feed_core::{Filters, SortOrder};

use super::post_card::post_item;
use super::view::{Button, Icon, SelectOption, Severity, TextStyle, UiAction, View};
use crate::feed::FeedSnapshot;

const EMPTY_MESSAGE: &str = "No posts to show.";
const END_MESSAGE: &str = "Reached the end.";

/// Project a feed snapshot into the page's view tree
///
/// Sections appear in a fixed order: error banner, loader, search summary,
/// sort selector, empty state, post list, end marker. The list stays visible
/// while the next page loads or after it failed.
pub fn render_feed(snapshot: &FeedSnapshot) -> View {
    let pagination = snapshot.pagination();
    let idle = !pagination.is_loading && !pagination.is_error;
    let mut children = Vec::new();

    if pagination.is_error && !pagination.is_loading {
        if let Some(error) = &snapshot.error {
            children.push(View::Alert {
                severity: Severity::Warning,
                icon: Icon::Warning,
                message: error.message.clone(),
                action: Some(Button::new("Retry", UiAction::Retry)),
            });
        }
    }

    if pagination.is_loading && !pagination.is_error {
        children.push(View::Loader);
    }

    if snapshot.filters.has_search() {
        children.push(search_summary(&snapshot.filters, snapshot.posts.len()));
    }

    children.push(sort_selector(snapshot.filters.sort));

    if idle && snapshot.posts.is_empty() {
        children.push(View::Alert {
            severity: Severity::Info,
            icon: Icon::Empty,
            message: EMPTY_MESSAGE.to_string(),
            action: None,
        });
    }

    if let Some(last) = snapshot.posts.len().checked_sub(1) {
        children.push(View::List {
            items: snapshot
                .posts
                .iter()
                .enumerate()
                .map(|(index, post)| post_item(post, index == last))
                .collect(),
        });

        if idle && !pagination.has_next_page {
            children.push(View::styled(END_MESSAGE, TextStyle::Caption));
        }
    }

    View::column(children)
}

fn search_summary(filters: &Filters, results: usize) -> View {
    View::row(vec![
        View::column(vec![
            View::styled(format!("Search: {}", filters.search), TextStyle::Heading),
            View::text(format!("Initial results: {results}")),
        ]),
        View::Button(Button::new("Clear", UiAction::ClearSearch).with_icon(Icon::Trash)),
    ])
}

fn sort_selector(current: SortOrder) -> View {
    View::Select {
        options: SortOrder::ALL
            .into_iter()
            .map(|sort| SelectOption {
                value: sort,
                label: sort.label().to_string(),
                selected: sort == current,
            })
            .collect(),
    }
}
