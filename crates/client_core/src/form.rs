use shared::{
    domain::{Post, PostId},
    protocol::{CommentPayload, PostPayload},
};

use crate::error::CommandError;

/// Whether a submit creates a new post or rewrites an existing one. The edit
/// target is captured when editing begins and is never re-derived from the
/// cache, so it stays stable across cache reloads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(PostId),
}

/// Transient input state for the single create-or-edit form plus the comment
/// inputs. Never persisted; discarded after a successful submit or an
/// explicit cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub mode: FormMode,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Raw comma-separated tag input, exactly as typed.
    pub tags_text: String,
    pub comment_user: String,
    pub comment_content: String,
}

impl FormDraft {
    /// Blank draft in create mode.
    pub fn begin_create(&mut self) {
        *self = Self::default();
    }

    /// Copies `post` into the draft and switches to edit mode. Tags are
    /// rendered back to comma-separated text with `", "` so that a
    /// submit-without-edits reproduces the original list.
    pub fn begin_edit(&mut self, post: &Post) {
        self.mode = FormMode::Edit(post.id.clone());
        self.title = post.title.clone();
        self.content = post.content.clone();
        self.category = post.category.clone();
        self.tags_text = post.tags.join(", ");
    }

    pub fn reset(&mut self) {
        self.begin_create();
    }

    /// The only validation the form performs: title, content, and category
    /// must be non-blank. Tags are optional; there are no length limits, no
    /// category whitelist, and no duplicate-title check.
    pub fn validate_for_submit(&self) -> Result<(), CommandError> {
        if self.title.trim().is_empty()
            || self.content.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(CommandError::Validation(
                "title, content, and category are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> PostPayload {
        PostPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: split_tags(&self.tags_text),
        }
    }

    pub fn comment_payload(&self) -> CommentPayload {
        CommentPayload {
            user: self.comment_user.clone(),
            content: self.comment_content.clone(),
        }
    }

    pub fn clear_comment_inputs(&mut self) {
        self.comment_user.clear();
        self.comment_content.clear();
    }
}

/// Splits raw tag input on commas and trims each piece. Splitting an empty
/// string yields one empty-string tag, not an empty list; that is the
/// expected output for a blank tags field, not a bug.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}
