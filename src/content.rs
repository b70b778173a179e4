use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod filter;
pub mod meta;
pub mod page;

/// Maximum summary length before truncation kicks in.
pub const SUMMARY_MAX_LEN: usize = 150;

const SUMMARY_FALLBACK: &str = "Read more about this topic...";

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("schema violation: {0}")]
    SchemaViolation(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("page {page} out of range for {total_pages} pages")]
    OutOfRange { page: usize, total_pages: usize },
    #[error("content not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeExample {
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(rename = "codeExample")]
    pub code_example: Option<CodeExample>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentBody {
    pub introduction: Option<Section>,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub conclusion: Option<Section>,
    pub cta: Option<Section>,
}

/// A blog post or portfolio project. The two listings share one schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<Author>,
    pub date: String,
    #[serde(default)]
    pub content: ContentBody,
}

/// Immutable, load-once collection of content items.
///
/// All schema validation happens here, at construction; downstream code
/// (filtering, pagination, rendering) assumes well-formed items.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    items: Vec<ContentItem>,
    tags: Vec<String>,
}

impl ContentStore {
    pub fn new(items: Vec<ContentItem>) -> Result<Self, ContentError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for item in &items {
            validate_item(item)?;
            if !ids.insert(item.id) {
                return Err(ContentError::SchemaViolation(format!(
                    "duplicate id {} ({})",
                    item.id, item.slug
                )));
            }
            if !slugs.insert(item.slug.as_str()) {
                return Err(ContentError::SchemaViolation(format!(
                    "duplicate slug {:?}",
                    item.slug
                )));
            }
        }
        let tags = filter::unique_tags(&items);
        Ok(ContentStore { items, tags })
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let items: Vec<ContentItem> = serde_json::from_str(raw)
            .map_err(|e| ContentError::SchemaViolation(format!("malformed content JSON: {e}")))?;
        Self::new(items)
    }

    /// Items in source order. Listings never re-sort.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Sorted, deduplicated tags across the store, computed once at load.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(item: &ContentItem) -> Result<(), ContentError> {
    let context = |msg: String| ContentError::SchemaViolation(format!("item {}: {msg}", item.id));
    if item.title.trim().is_empty() {
        return Err(context("empty title".to_string()));
    }
    if item.slug.is_empty()
        || !item
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(context(format!("slug {:?} is not URL-safe", item.slug)));
    }
    if item.tags.iter().any(|t| t.trim().is_empty()) {
        return Err(context("empty tag".to_string()));
    }
    if NaiveDate::parse_from_str(&item.date, "%Y-%m-%d").is_err() {
        return Err(context(format!("date {:?} is not YYYY-MM-DD", item.date)));
    }
    if let Some(intro) = &item.content.introduction {
        if intro.paragraphs.is_empty() {
            return Err(context("introduction without paragraphs".to_string()));
        }
    }
    Ok(())
}

/// The single summary-fallback point: explicit summary, else the first
/// introduction paragraph truncated to 150 characters, else a fixed string.
pub fn derive_summary(item: &ContentItem) -> String {
    if let Some(summary) = &item.summary {
        return summary.clone();
    }
    item.content
        .introduction
        .as_ref()
        .and_then(|intro| intro.paragraphs.first())
        .map(|p| meta::truncate_summary(p, SUMMARY_MAX_LEN))
        .unwrap_or_else(|| SUMMARY_FALLBACK.to_string())
}

static BLOG_POSTS: LazyLock<ContentStore> = LazyLock::new(|| load_store("posts.json"));
static PROJECTS: LazyLock<ContentStore> = LazyLock::new(|| load_store("projects.json"));

/// The blog post store, loaded and validated once per process.
pub fn blog_posts() -> &'static ContentStore {
    &BLOG_POSTS
}

/// The portfolio project store, loaded and validated once per process.
pub fn projects() -> &'static ContentStore {
    &PROJECTS
}

fn load_store(name: &str) -> ContentStore {
    let file = Assets::get(name).expect("embedded content file should exist");
    let raw = String::from_utf8(file.data.into()).expect("content file should be UTF-8");
    ContentStore::from_json(&raw).expect("embedded content should pass validation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, slug: &str) -> ContentItem {
        ContentItem {
            id,
            title: format!("Post {id}"),
            slug: slug.to_string(),
            summary: Some(format!("Summary {id}")),
            tags: vec!["Rust".to_string()],
            author: Some(Author {
                name: "Yuvaraj".to_string(),
            }),
            date: "2024-10-09".to_string(),
            content: ContentBody::default(),
        }
    }

    #[test]
    fn test_embedded_stores_load() {
        assert!(!blog_posts().is_empty());
        assert!(!projects().is_empty());
        assert!(blog_posts()
            .by_slug("optimizing-react-speed-performance")
            .is_some());
    }

    #[test]
    fn test_store_preserves_source_order() {
        let store = ContentStore::new(vec![item(2, "b"), item(1, "a"), item(3, "c")]).unwrap();
        let ids: Vec<u32> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = ContentStore::new(vec![item(1, "a"), item(1, "b")]).unwrap_err();
        assert!(matches!(err, ContentError::SchemaViolation(_)));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ContentStore::new(vec![item(1, "same"), item(2, "same")]).unwrap_err();
        assert!(matches!(err, ContentError::SchemaViolation(_)));
    }

    #[test]
    fn test_bad_slug_rejected() {
        let mut bad = item(1, "a");
        bad.slug = "not a slug!".to_string();
        assert!(ContentStore::new(vec![bad]).is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut bad = item(1, "a");
        bad.date = "October 9, 2024".to_string();
        assert!(ContentStore::new(vec![bad]).is_err());
    }

    #[test]
    fn test_empty_tag_rejected() {
        let mut bad = item(1, "a");
        bad.tags.push("  ".to_string());
        assert!(ContentStore::new(vec![bad]).is_err());
    }

    #[test]
    fn test_empty_introduction_rejected() {
        let mut bad = item(1, "a");
        bad.content.introduction = Some(Section {
            heading: "Intro".to_string(),
            paragraphs: vec![],
            code_example: None,
        });
        assert!(ContentStore::new(vec![bad]).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ContentStore::from_json("{not json").is_err());
        assert!(ContentStore::from_json("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_derive_summary_prefers_explicit() {
        let i = item(1, "a");
        assert_eq!(derive_summary(&i), "Summary 1");
    }

    #[test]
    fn test_derive_summary_falls_back_to_introduction() {
        let mut i = item(1, "a");
        i.summary = None;
        i.content.introduction = Some(Section {
            heading: "Intro".to_string(),
            paragraphs: vec!["First paragraph.".to_string(), "Second.".to_string()],
            code_example: None,
        });
        assert_eq!(derive_summary(&i), "First paragraph.");
    }

    #[test]
    fn test_derive_summary_truncates_long_introduction() {
        let mut i = item(1, "a");
        i.summary = None;
        i.content.introduction = Some(Section {
            heading: "Intro".to_string(),
            paragraphs: vec!["a".repeat(200)],
            code_example: None,
        });
        let summary = derive_summary(&i);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_LEN + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_derive_summary_fixed_fallback() {
        let mut i = item(1, "a");
        i.summary = None;
        assert_eq!(derive_summary(&i), SUMMARY_FALLBACK);
    }
}
