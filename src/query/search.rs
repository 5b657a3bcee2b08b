//! Substring search and category membership

use std::collections::HashSet;

use crate::model::Card;

/// Lowercased, trimmed query; `None` when it matches everything
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive match against title or content
///
/// `needle` must already be normalized with [`normalize_query`].
pub fn matches_search(card: &Card, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    card.title.to_lowercase().contains(needle) || card.content.to_lowercase().contains(needle)
}

/// An empty selection means no category filtering
pub fn matches_categories(card: &Card, selected: &HashSet<String>) -> bool {
    selected.is_empty() || selected.contains(&card.category_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, content: &str) -> Card {
        Card {
            id: "id".into(),
            title: title.into(),
            content: content.into(),
            category_id: "cat".into(),
            created_at: 0,
            updated_at: 0,
            image_id: None,
        }
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        assert_eq!(normalize_query("   \t"), None);
        assert_eq!(normalize_query("  Foo "), Some("foo".to_string()));
    }

    #[test]
    fn test_matches_title_or_content_case_insensitive() {
        let c = card("Docker Run", "starts a CONTAINER");
        assert!(matches_search(&c, Some("docker")));
        assert!(matches_search(&c, Some("container")));
        assert!(!matches_search(&c, Some("kubectl")));
        assert!(matches_search(&c, None));
    }

    #[test]
    fn test_category_membership() {
        let c = card("t", "c");
        let empty = HashSet::new();
        let other: HashSet<String> = ["x".to_string()].into();
        let mine: HashSet<String> = ["cat".to_string(), "x".to_string()].into();
        assert!(matches_categories(&c, &empty));
        assert!(!matches_categories(&c, &other));
        assert!(matches_categories(&c, &mine));
    }
}
