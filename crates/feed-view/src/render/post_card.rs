//! Post card projection

use feed_core::{Post, User};

use super::format::format_date;
use super::view::{Icon, ListItem, TextStyle, View};

/// Avatar linking to the author's profile
///
/// Falls back to a generic user icon when no profile image is set.
pub(crate) fn avatar(user: &User) -> View {
    let picture = match &user.profile_image {
        Some(image) => View::Image {
            src: image.url.clone(),
            alt: user.avatar_alt(),
        },
        None => View::Icon {
            icon: Icon::User,
            label: "User icon".to_string(),
        },
    };
    View::link(user.profile_path(), picture)
}

/// Card for a single post
pub fn render_post_card(post: &Post) -> View {
    let mut children = Vec::with_capacity(5);

    if let Some(cover) = &post.cover_image {
        children.push(View::link(
            post.path(),
            View::Image {
                src: cover.url.clone(),
                alt: post.title.clone(),
            },
        ));
    }

    children.push(View::row(vec![
        avatar(&post.user),
        View::column(vec![
            View::text(post.user.name.clone()),
            View::styled(format_date(post.created_at), TextStyle::Caption),
        ]),
    ]));

    children.push(View::link(
        post.path(),
        View::styled(post.title.clone(), TextStyle::Heading),
    ));

    if !post.tags.is_empty() {
        children.push(View::row(
            post.tags
                .iter()
                .map(|tag| View::Chip {
                    icon: Icon::Hash,
                    label: tag.clone(),
                })
                .collect(),
        ));
    }

    children.push(View::row(vec![
        View::stat(Icon::Comments, format!("{} comments", post.comment_count())),
        View::stat(Icon::Claps, format!("{} claps", post.clap_count())),
        View::stat(Icon::Views, format!("{} views", post.visit_count())),
        View::stat(Icon::Words, format!("{} words", post.word_count())),
        View::stat(Icon::ReadTime, post.read_time.clone()),
    ]));

    View::Card { children }
}

/// List entry wrapping a post card
pub(crate) fn post_item(post: &Post, sentinel: bool) -> ListItem {
    ListItem {
        key: post.id.to_string(),
        sentinel,
        content: render_post_card(post),
    }
}
