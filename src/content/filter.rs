use std::collections::BTreeSet;

use super::{derive_summary, ContentItem};

/// Whether an item matches a free-text search term and an optional tag.
///
/// The search dimension is a case-insensitive substring test over the
/// title, the (derived) summary, and every tag; the tag dimension is an
/// exact, case-sensitive membership test. Empty inputs are wildcards and
/// the result is the AND of both dimensions.
pub fn matches(item: &ContentItem, search: &str, tag: Option<&str>) -> bool {
    let search_ok = if search.is_empty() {
        true
    } else {
        let needle = search.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || derive_summary(item).to_lowercase().contains(&needle)
            || item
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    };
    let tag_ok = match tag {
        None => true,
        Some(t) if t.is_empty() => true,
        Some(t) => item.tags.iter().any(|candidate| candidate == t),
    };
    search_ok && tag_ok
}

/// Every matching item, in store order. Items are borrowed, not copied;
/// the full scan is recomputed from scratch on each call (the stores are
/// small by design, so no index is warranted).
pub fn filter_items<'a>(
    items: &'a [ContentItem],
    search: &str,
    tag: Option<&str>,
) -> Vec<&'a ContentItem> {
    items
        .iter()
        .filter(|item| matches(item, search, tag))
        .collect()
}

/// The deduplicated tags across `items`, lexicographically ascending.
pub fn unique_tags(items: &[ContentItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBody;

    fn item(id: u32, title: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            slug: format!("item-{id}"),
            summary: Some(format!("{title} in depth")),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: None,
            date: "2024-01-01".to_string(),
            content: ContentBody::default(),
        }
    }

    fn fixtures() -> Vec<ContentItem> {
        vec![
            item(1, "React Tips", &["React", "Perf"]),
            item(2, "Vue Guide", &["Vue"]),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let items = fixtures();
        let found = filter_items(&items, "react", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let items = fixtures();
        let found = filter_items(&items, "", Some("Vue"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
        // Tag dimension is case-sensitive.
        assert!(filter_items(&items, "", Some("vue")).is_empty());
    }

    #[test]
    fn test_search_matches_tags_as_substring() {
        let items = fixtures();
        let found = filter_items(&items, "perf", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_search_matches_derived_summary() {
        let mut items = fixtures();
        items[1].summary = None;
        items[1].content.introduction = Some(crate::content::Section {
            heading: "Intro".to_string(),
            paragraphs: vec!["Composition API patterns for large apps.".to_string()],
            code_example: None,
        });
        let found = filter_items(&items, "composition api", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_both_dimensions_must_match() {
        let items = fixtures();
        assert!(filter_items(&items, "react", Some("Vue")).is_empty());
        let found = filter_items(&items, "react", Some("Perf"));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_filters_are_wildcards() {
        let items = fixtures();
        assert_eq!(filter_items(&items, "", None).len(), 2);
        assert_eq!(filter_items(&items, "", Some("")).len(), 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let items = fixtures();
        let first: Vec<u32> = filter_items(&items, "e", Some("Vue"))
            .iter()
            .map(|i| i.id)
            .collect();
        let second: Vec<u32> = filter_items(&items, "e", Some("Vue"))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_longer_search_narrows() {
        let items = fixtures();
        let broad: Vec<u32> = filter_items(&items, "gui", None).iter().map(|i| i.id).collect();
        let narrow: Vec<u32> = filter_items(&items, "guide", None)
            .iter()
            .map(|i| i.id)
            .collect();
        assert!(narrow.iter().all(|id| broad.contains(id)));
    }

    #[test]
    fn test_filter_preserves_store_order() {
        let items = vec![
            item(3, "Alpha React", &["React"]),
            item(1, "Beta React", &["React"]),
            item(2, "Gamma React", &["React"]),
        ];
        let ids: Vec<u32> = filter_items(&items, "react", None)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_unique_tags_sorted_and_deduped() {
        let items = vec![item(1, "A", &["b", "a"]), item(2, "B", &["a", "c"])];
        assert_eq!(unique_tags(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_tags_empty_input() {
        assert!(unique_tags(&[]).is_empty());
        let items = vec![item(1, "A", &[])];
        assert!(unique_tags(&items).is_empty());
    }
}
