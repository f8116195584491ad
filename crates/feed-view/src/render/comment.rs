//! Comment item projection

use feed_core::Comment;

use super::format::format_date;
use super::post_card::avatar;
use super::view::{Button, Icon, UiAction, View};
use crate::comment::{CommentItem, SubmitMode};

/// `{name} - {date}` with the edit date appended once the comment changed
fn header(comment: &Comment) -> String {
    let mut header = format!(
        "{} - {}",
        comment.user.name,
        format_date(comment.created_at)
    );
    if comment.is_edited() {
        header.push_str(": Edited at ");
        header.push_str(&format_date(comment.updated_at));
    }
    header
}

pub fn render_comment(item: &CommentItem) -> View {
    let comment = item.comment();
    let flags = item.flags();

    let mut children = vec![
        View::row(vec![
            avatar(&comment.user),
            View::text(header(comment)),
            View::Menu {
                trigger: Icon::More,
                items: vec![
                    Button::new("Edit", UiAction::EditComment).with_icon(Icon::Edit),
                    Button::new("Reply", UiAction::ReplyToComment).with_icon(Icon::Reply),
                    Button::new("Delete", UiAction::DeleteComment).with_icon(Icon::Trash),
                ],
            },
        ]),
        View::text(comment.content.clone()),
    ];

    if flags.is_login_prompt_open {
        children.push(View::Dialog {
            title: "Sign in required".to_string(),
            message: "You need to be signed in to do that.".to_string(),
            actions: vec![
                Button::new("Close", UiAction::DismissLoginPrompt),
                Button::new("Sign in", UiAction::SignIn),
            ],
        });
    }

    if flags.is_delete_alert_open {
        children.push(View::Dialog {
            title: "Delete comment?".to_string(),
            message: "This comment will be permanently deleted.".to_string(),
            actions: vec![
                Button::new("Cancel", UiAction::CancelDelete),
                Button::new("Delete", UiAction::ConfirmDelete),
            ],
        });
    }

    if let (Some(mode), Some(seed)) = (item.submit_mode(), item.form_seed()) {
        let (placeholder, submit) = match mode {
            SubmitMode::Edit => ("Edit your comment", "Save"),
            SubmitMode::Reply => ("Write a reply", "Reply"),
        };
        children.push(View::Form {
            value: seed.to_string(),
            placeholder: placeholder.to_string(),
            submit: Button::new(submit, UiAction::SubmitComment),
            cancel: Button::new("Cancel", UiAction::CloseForm),
        });
    }

    View::Card { children }
}
