//! Comment item - local state and mutations of one rendered comment

use std::fmt;
use std::sync::Arc;

use feed_core::{AuthContext, Comment, CommentRepository, DomainError, DomainResult, NewComment};
use validator::Validate;

/// Called after a successful mutation so the owner re-lists the comments
pub type ReloadCallback = Arc<dyn Fn() + Send + Sync>;

/// UI flags local to one comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentItemFlags {
    pub is_reply: bool,
    pub is_editing: bool,
    pub is_login_prompt_open: bool,
    pub is_delete_alert_open: bool,
}

impl CommentItemFlags {
    #[inline]
    pub fn is_form_open(&self) -> bool {
        self.is_reply || self.is_editing
    }
}

/// What submitting the open form does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Replace the comment's content
    Edit,
    /// Post a reply to the comment
    Reply,
}

/// One comment together with its edit, reply, and delete workflow
///
/// Nothing is removed or changed locally; every successful mutation invokes
/// the reload callback and the owner renders the fresh list.
pub struct CommentItem {
    comment: Comment,
    auth: Arc<dyn AuthContext>,
    comments: Arc<dyn CommentRepository>,
    reload: ReloadCallback,
    flags: CommentItemFlags,
}

impl CommentItem {
    pub fn new(
        comment: Comment,
        auth: Arc<dyn AuthContext>,
        comments: Arc<dyn CommentRepository>,
        reload: ReloadCallback,
    ) -> Self {
        Self {
            comment,
            auth,
            comments,
            reload,
            flags: CommentItemFlags::default(),
        }
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn flags(&self) -> CommentItemFlags {
        self.flags
    }

    /// Open the login prompt instead of acting when nobody is signed in
    fn require_auth(&mut self) -> bool {
        if self.auth.is_authenticated() {
            true
        } else {
            tracing::debug!(comment_id = %self.comment.id, "Sign-in required");
            self.flags.is_login_prompt_open = true;
            false
        }
    }

    /// Open the form seeded with the current content
    pub fn edit(&mut self) {
        if self.require_auth() {
            self.flags.is_editing = true;
            self.flags.is_reply = false;
        }
    }

    /// Open an empty reply form
    pub fn reply(&mut self) {
        if self.require_auth() {
            self.flags.is_reply = true;
            self.flags.is_editing = false;
        }
    }

    /// Ask for delete confirmation
    pub fn request_delete(&mut self) {
        if self.require_auth() {
            self.flags.is_delete_alert_open = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.flags.is_delete_alert_open = false;
    }

    pub fn dismiss_login_prompt(&mut self) {
        self.flags.is_login_prompt_open = false;
    }

    /// Close the edit or reply form
    pub fn close_form(&mut self) {
        self.flags.is_editing = false;
        self.flags.is_reply = false;
    }

    /// Mode of the open form, if any
    pub fn submit_mode(&self) -> Option<SubmitMode> {
        if self.flags.is_editing {
            Some(SubmitMode::Edit)
        } else if self.flags.is_reply {
            Some(SubmitMode::Reply)
        } else {
            None
        }
    }

    /// Initial text of the open form
    pub fn form_seed(&self) -> Option<&str> {
        self.submit_mode().map(|mode| match mode {
            SubmitMode::Edit => self.comment.content.as_str(),
            SubmitMode::Reply => "",
        })
    }

    /// Delete the comment, then reload
    ///
    /// Requires the confirmation opened by `request_delete`. On failure the
    /// confirmation stays open and the error is returned.
    pub async fn confirm_delete(&mut self) -> DomainResult<()> {
        if !self.require_auth() {
            return Err(DomainError::Unauthenticated);
        }
        if !self.flags.is_delete_alert_open {
            return Err(DomainError::validation("Delete was not confirmed"));
        }

        let id = self.comment.id;
        self.comments.delete(id).await.inspect_err(|e| {
            tracing::warn!(comment_id = %id, error = %e, "Failed to delete comment");
        })?;

        tracing::info!(comment_id = %id, "Comment deleted");
        self.flags.is_delete_alert_open = false;
        (self.reload)();
        Ok(())
    }

    /// Submit the open form
    ///
    /// Editing replaces the content; replying creates a comment on the same
    /// post that points at this one. The form closes and the reload callback
    /// runs only on success.
    pub async fn submit(&mut self, content: &str) -> DomainResult<Comment> {
        if !self.require_auth() {
            return Err(DomainError::Unauthenticated);
        }
        let mode = self
            .submit_mode()
            .ok_or_else(|| DomainError::validation("No comment form is open"))?;

        let body = NewComment::reply(self.comment.post_id, self.comment.id, content);
        body.validate()?;

        let saved = match mode {
            SubmitMode::Edit => self.comments.update(self.comment.id, &body.content).await,
            SubmitMode::Reply => self.comments.create(&body).await,
        }
        .inspect_err(|e| {
            tracing::warn!(comment_id = %self.comment.id, ?mode, error = %e, "Failed to save comment");
        })?;

        tracing::info!(comment_id = %saved.id, ?mode, "Comment saved");
        self.close_form();
        (self.reload)();
        Ok(saved)
    }
}

impl fmt::Debug for CommentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentItem")
            .field("comment", &self.comment)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
