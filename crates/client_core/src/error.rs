use std::fmt;

use shared::domain::PostId;
use thiserror::Error;

/// Logical slot a command occupies while in flight. One submit slot for the
/// form, one comment slot, and one per delete target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSlot {
    Submit,
    Delete,
    Comment,
}

impl CommandSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandSlot::Submit => "submit",
            CommandSlot::Delete => "delete",
            CommandSlot::Comment => "comment",
        }
    }
}

impl fmt::Display for CommandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a dispatched command can fail with. Each failure is also
/// surfaced through the single `last_error` message slot on the app state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("error fetching posts: {0}")]
    Fetch(String),
    #[error("{0}")]
    Validation(String),
    #[error("error submitting post: {0}")]
    Submit(String),
    #[error("error deleting post: {0}")]
    Delete(String),
    #[error("error adding comment: {0}")]
    Comment(String),
    /// The post being edited no longer exists on the server.
    #[error("post {0} no longer exists on the server")]
    StaleTarget(PostId),
    /// Rejected locally: the command's slot already has a request in flight.
    #[error("a {0} command is already in flight")]
    Busy(CommandSlot),
}
