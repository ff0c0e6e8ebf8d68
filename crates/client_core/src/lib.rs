//! Client-side cache and command dispatch for a blog-post management UI.
//!
//! The crate keeps a local snapshot of a remote post collection
//! ([`PostCache`]), derives category views from it, owns the transient
//! create/edit form state ([`FormDraft`]), and funnels every mutation
//! through [`BlogClient`], which talks to the authoritative [`RemoteStore`]
//! and reconciles the snapshot after each write.

pub mod cache;
pub mod category;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod remote;
pub mod state;

pub use cache::PostCache;
pub use category::{categories, filter_by_category};
pub use dispatcher::BlogClient;
pub use error::{CommandError, CommandSlot};
pub use form::{FormDraft, FormMode};
pub use remote::{HttpRemoteStore, RemoteError, RemoteStore};
pub use state::{AppState, StateEvent};
