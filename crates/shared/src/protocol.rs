use serde::{Deserialize, Serialize};

/// Request body for creating or updating a post. The remote store owns the
/// identifier and the comment list, so neither appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Request body for appending a comment to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub user: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_payload_serializes_all_fields() {
        let payload = PostPayload {
            title: "T".into(),
            content: "C".into(),
            category: "News".into(),
            tags: vec!["a".into(), "b".into()],
        };
        let value = serde_json::to_value(&payload).expect("json");
        assert_eq!(value["title"], "T");
        assert_eq!(value["tags"], serde_json::json!(["a", "b"]));
    }
}
