//! Category view derived from the cache. Pure functions with no lifecycle of
//! their own; recomputed from the snapshot, never incrementally patched.

use shared::domain::Post;

/// Distinct `category` values across `posts`, in first-occurrence order.
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for post in posts {
        if !distinct.iter().any(|category| category == &post.category) {
            distinct.push(post.category.clone());
        }
    }
    distinct
}

/// Posts whose category equals `selected` exactly (case-sensitive). An empty
/// selection is the identity filter: every post passes.
pub fn filter_by_category<'a>(posts: &'a [Post], selected: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| selected.is_empty() || post.category == selected)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::PostId;

    fn post(id: &str, category: &str) -> Post {
        Post {
            id: PostId::from(id),
            title: "T".into(),
            content: "C".into(),
            category: category.into(),
            tags: vec!["x".into()],
            comments: Vec::new(),
        }
    }

    #[test]
    fn empty_selection_is_the_identity_filter() {
        let posts = vec![post("1", "News"), post("2", "Sports"), post("3", "News")];
        let filtered = filter_by_category(&posts, "");
        assert_eq!(filtered.len(), posts.len());
        for (kept, original) in filtered.iter().zip(posts.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn filter_matches_exactly_and_case_sensitively() {
        let posts = vec![post("1", "News")];
        assert_eq!(filter_by_category(&posts, "News").len(), 1);
        assert!(filter_by_category(&posts, "Sports").is_empty());
        assert!(filter_by_category(&posts, "news").is_empty());
        assert!(filter_by_category(&posts, "New").is_empty());
    }

    #[test]
    fn categories_collapse_duplicates_in_first_occurrence_order() {
        let posts = vec![
            post("1", "News"),
            post("2", "Sports"),
            post("3", "News"),
            post("4", "Tech"),
            post("5", "Sports"),
        ];
        assert_eq!(categories(&posts), vec!["News", "Sports", "Tech"]);
    }

    #[test]
    fn every_category_comes_from_some_post() {
        let posts = vec![post("1", "A"), post("2", "B")];
        for category in categories(&posts) {
            assert!(posts.iter().any(|p| p.category == category));
        }
        assert!(categories(&[]).is_empty());
    }
}
