use std::collections::HashSet;

use shared::domain::{Post, PostId};

use crate::{
    cache::PostCache,
    category::{categories, filter_by_category},
    form::FormDraft,
};

/// Per-slot in-flight markers. A command whose slot is already taken is
/// rejected locally before any network call, so rapid repeated clicks cannot
/// issue duplicate requests.
#[derive(Debug, Clone, Default)]
pub struct InflightSlots {
    pub submit: bool,
    pub comment: bool,
    pub deletes: HashSet<PostId>,
}

/// The whole mutable application state, replacing what the source UI kept in
/// scattered hook variables. Components transform it through [`StateEvent`]s
/// applied by the dispatcher; consumers only read.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub cache: PostCache,
    /// Selected category; empty string means "all categories".
    pub category_filter: String,
    pub form: FormDraft,
    /// Single human-readable message slot; each new error replaces the last.
    pub last_error: Option<String>,
    /// Whether the create/edit surface (the source UI's modal) is showing.
    pub editor_open: bool,
    pub(crate) inflight: InflightSlots,
}

/// Outcome of a dispatched command, applied to [`AppState`] as a pure
/// transition.
#[derive(Debug, Clone)]
pub enum StateEvent {
    /// Fresh snapshot fetched from the remote store; replaces the cache
    /// wholesale.
    PostsLoaded(Vec<Post>),
    /// Confirmed delete; patches the cache locally.
    PostRemoved(PostId),
    FormReset,
    CommentInputsCleared,
    EditorClosed,
    ErrorReported(String),
    ErrorCleared,
}

impl AppState {
    pub fn apply(&mut self, event: StateEvent) {
        match event {
            StateEvent::PostsLoaded(posts) => self.cache.replace(posts),
            StateEvent::PostRemoved(id) => self.cache.remove(&id),
            StateEvent::FormReset => self.form.reset(),
            StateEvent::CommentInputsCleared => self.form.clear_comment_inputs(),
            StateEvent::EditorClosed => self.editor_open = false,
            StateEvent::ErrorReported(message) => self.last_error = Some(message),
            StateEvent::ErrorCleared => self.last_error = None,
        }
    }

    /// Posts passing the current category filter, in cache order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_by_category(self.cache.posts(), &self.category_filter)
    }

    /// Distinct categories currently in the cache, first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        categories(self.cache.posts())
    }
}
