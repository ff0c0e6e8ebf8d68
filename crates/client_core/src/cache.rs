use shared::domain::{Post, PostId};

/// Local in-memory snapshot of the remote post collection. The single source
/// of truth for every consumer; entries are never edited in place. The
/// snapshot is replaced wholesale after each successful create, update, or
/// comment command, and patched locally only after a confirmed delete.
#[derive(Debug, Clone, Default)]
pub struct PostCache {
    posts: Vec<Post>,
}

impl PostCache {
    /// Ordered read-only view of the current snapshot.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.get(id).is_some()
    }

    /// Atomic wholesale replacement with a freshly fetched collection.
    pub(crate) fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Local removal after the server confirmed a delete. The one place the
    /// snapshot is patched instead of reloaded: no confirming fetch follows
    /// a delete, and the removed item's shape is already fully known.
    pub(crate) fn remove(&mut self, id: &PostId) {
        self.posts.retain(|post| &post.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: PostId::from(id),
            title: title.into(),
            content: "body".into(),
            category: "News".into(),
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let mut cache = PostCache::default();
        cache.replace(vec![post("1", "a"), post("2", "b")]);
        assert_eq!(cache.len(), 2);

        cache.replace(vec![post("3", "c")]);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&PostId::from("3")));
        assert!(!cache.contains(&PostId::from("1")));
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let mut cache = PostCache::default();
        cache.replace(vec![post("1", "a"), post("2", "b"), post("3", "c")]);
        let untouched = cache.get(&PostId::from("2")).cloned().expect("post 2");

        cache.remove(&PostId::from("1"));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&PostId::from("1")));
        assert_eq!(cache.get(&PostId::from("2")), Some(&untouched));
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut cache = PostCache::default();
        cache.replace(vec![post("1", "a")]);
        cache.remove(&PostId::from("nope"));
        assert_eq!(cache.len(), 1);
    }
}
