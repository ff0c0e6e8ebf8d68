use std::sync::Arc;

use shared::domain::{Post, PostId};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{
    error::{CommandError, CommandSlot},
    form::{FormDraft, FormMode},
    remote::{RemoteError, RemoteStore},
    state::{AppState, StateEvent},
};

/// Command dispatcher and state owner. The only component permitted to call
/// the remote store for mutations; every write follows the retry-free
/// refresh-after-write protocol: create/update/add-comment reload the cache
/// wholesale on success, delete patches it locally.
pub struct BlogClient {
    store: Arc<dyn RemoteStore>,
    pub(crate) state: Mutex<AppState>,
}

impl BlogClient {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            state: Mutex::new(AppState::default()),
        }
    }

    /// Read access to the current state.
    pub async fn with_state<R>(&self, read: impl FnOnce(&AppState) -> R) -> R {
        read(&*self.state.lock().await)
    }

    /// Mutable access to the form draft, for wiring text inputs.
    pub async fn with_form_mut<R>(&self, edit: impl FnOnce(&mut FormDraft) -> R) -> R {
        edit(&mut self.state.lock().await.form)
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.state.lock().await.cache.posts().to_vec()
    }

    pub async fn visible_posts(&self) -> Vec<Post> {
        let state = self.state.lock().await;
        state.visible_posts().into_iter().cloned().collect()
    }

    pub async fn categories(&self) -> Vec<String> {
        self.state.lock().await.categories()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }

    /// Empty string selects all categories.
    pub async fn select_category(&self, selected: impl Into<String>) {
        self.state.lock().await.category_filter = selected.into();
    }

    /// Opens the editor surface with a blank draft in create mode.
    pub async fn begin_create(&self) {
        let mut state = self.state.lock().await;
        state.form.begin_create();
        state.editor_open = true;
    }

    /// Opens the editor surface with the draft copied from the cached post.
    /// The edit target must be present in the cache when editing begins.
    pub async fn begin_edit(&self, id: &PostId) -> Result<(), CommandError> {
        let mut state = self.state.lock().await;
        let Some(post) = state.cache.get(id).cloned() else {
            return Err(CommandError::StaleTarget(id.clone()));
        };
        state.form.begin_edit(&post);
        state.editor_open = true;
        Ok(())
    }

    pub async fn cancel_edit(&self) {
        let mut state = self.state.lock().await;
        state.form.reset();
        state.editor_open = false;
    }

    /// Initial or refresh load. On transport failure the snapshot is left
    /// unchanged; there is no partial update.
    pub async fn load_posts(&self) -> Result<(), CommandError> {
        match self.store.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "cache replaced from remote store");
                self.state
                    .lock()
                    .await
                    .apply(StateEvent::PostsLoaded(posts));
                Ok(())
            }
            Err(remote) => {
                let err = CommandError::Fetch(remote.to_string());
                error!("fetch failed: {remote}");
                self.state
                    .lock()
                    .await
                    .apply(StateEvent::ErrorReported(err.to_string()));
                Err(err)
            }
        }
    }

    /// Submits the current draft: create in `Create` mode, rewrite of the
    /// captured target in `Edit` mode. Success resets the form, closes the
    /// editor surface, and reloads the cache. Failure preserves the draft
    /// for a manual resubmit; there are no automatic retries.
    pub async fn submit_form(&self) -> Result<(), CommandError> {
        let (mode, payload) = {
            let mut state = self.state.lock().await;
            if state.inflight.submit {
                return Err(CommandError::Busy(CommandSlot::Submit));
            }
            if let Err(err) = state.form.validate_for_submit() {
                state.apply(StateEvent::ErrorReported(err.to_string()));
                return Err(err);
            }
            state.inflight.submit = true;
            (state.form.mode.clone(), state.form.to_payload())
        };

        let outcome = match &mode {
            FormMode::Create => self.store.create_post(&payload).await.map(|_| ()),
            FormMode::Edit(id) => self.store.update_post(id, &payload).await.map(|_| ()),
        };

        match (outcome, mode) {
            (Ok(()), _) => {
                {
                    let mut state = self.state.lock().await;
                    state.apply(StateEvent::FormReset);
                    state.apply(StateEvent::EditorClosed);
                    state.apply(StateEvent::ErrorCleared);
                    state.inflight.submit = false;
                }
                self.load_posts().await
            }
            (Err(RemoteError::NotFound), FormMode::Edit(id)) => {
                // The edit target was deleted out from under us; a retry of
                // the same draft can never succeed, so reset instead.
                let err = CommandError::StaleTarget(id);
                error!("update target vanished: {err}");
                let mut state = self.state.lock().await;
                state.apply(StateEvent::FormReset);
                state.apply(StateEvent::EditorClosed);
                state.apply(StateEvent::ErrorReported(err.to_string()));
                state.inflight.submit = false;
                Err(err)
            }
            (Err(remote), _) => {
                let err = CommandError::Submit(remote.to_string());
                error!("submit failed: {remote}");
                let mut state = self.state.lock().await;
                state.apply(StateEvent::ErrorReported(err.to_string()));
                state.inflight.submit = false;
                Err(err)
            }
        }
    }

    /// Deletes a post. Success patches the cache locally instead of
    /// reloading: no new identifier is involved and the removed item's shape
    /// is already fully known. Failure leaves the cache untouched.
    pub async fn delete_post(&self, id: &PostId) -> Result<(), CommandError> {
        {
            let mut state = self.state.lock().await;
            if !state.inflight.deletes.insert(id.clone()) {
                return Err(CommandError::Busy(CommandSlot::Delete));
            }
        }

        let outcome = self.store.delete_post(id).await;

        let mut state = self.state.lock().await;
        state.inflight.deletes.remove(id);
        match outcome {
            Ok(()) => {
                debug!(post_id = %id, "delete confirmed; patching cache locally");
                state.apply(StateEvent::PostRemoved(id.clone()));
                state.apply(StateEvent::ErrorCleared);
                Ok(())
            }
            Err(remote) => {
                let err = CommandError::Delete(remote.to_string());
                error!(post_id = %id, "delete failed: {remote}");
                state.apply(StateEvent::ErrorReported(err.to_string()));
                Err(err)
            }
        }
    }

    /// Appends a comment built from the draft's comment inputs. Success
    /// clears those inputs and reloads the cache; failure preserves them.
    pub async fn add_comment(&self, post_id: &PostId) -> Result<(), CommandError> {
        let payload = {
            let mut state = self.state.lock().await;
            if state.inflight.comment {
                return Err(CommandError::Busy(CommandSlot::Comment));
            }
            state.inflight.comment = true;
            state.form.comment_payload()
        };

        let outcome = self.store.add_comment(post_id, &payload).await;

        match outcome {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    state.apply(StateEvent::CommentInputsCleared);
                    state.inflight.comment = false;
                }
                self.load_posts().await
            }
            Err(remote) => {
                let err = CommandError::Comment(remote.to_string());
                error!(post_id = %post_id, "comment failed: {remote}");
                let mut state = self.state.lock().await;
                state.apply(StateEvent::ErrorReported(err.to_string()));
                state.inflight.comment = false;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
