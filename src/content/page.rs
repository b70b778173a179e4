use super::ContentError;

/// One page of a listing: a window into the (filtered) item slice plus
/// the page count for the whole slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn empty() -> Self {
        Page {
            items: &[],
            total_pages: 0,
        }
    }
}

/// Slice out page `page` (1-based) of `items` in windows of `page_size`.
///
/// Fail-fast contract: callers clamp the page number (see [`ListState`]);
/// a request outside `[1, total_pages]` is `OutOfRange`, as is a zero
/// page size. The one exception is an empty input, where page 1 is the
/// valid empty page with `total_pages == 0`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Result<Page<'_, T>, ContentError> {
    if page_size == 0 {
        return Err(ContentError::OutOfRange {
            page,
            total_pages: 0,
        });
    }
    let total_pages = items.len().div_ceil(page_size);
    if items.is_empty() {
        return if page == 1 {
            Ok(Page::empty())
        } else {
            Err(ContentError::OutOfRange { page, total_pages })
        };
    }
    if page == 0 || page > total_pages {
        return Err(ContentError::OutOfRange { page, total_pages });
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Ok(Page {
        items: &items[start..end],
        total_pages,
    })
}

/// Transient listing state held by the view layer.
///
/// Encodes the reset contract: any change to the search term or the
/// selected tag puts the listing back on page 1, so a stale page number
/// can never point past the end of a newly-shrunk filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search: String,
    pub tag: Option<String>,
    pub page: usize,
}

impl ListState {
    pub fn new() -> Self {
        ListState {
            search: String::new(),
            tag: None,
            page: 1,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
        self.page = 1;
    }

    /// Clamp into `[1, max(total_pages, 1)]` so the subsequent
    /// `paginate` call cannot fail.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_items_in_pages_of_six() {
        let items: Vec<u32> = (1..=9).collect();
        let first = paginate(&items, 6, 1).unwrap();
        assert_eq!(first.items, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(first.total_pages, 2);
        let second = paginate(&items, 6, 2).unwrap();
        assert_eq!(second.items, &[7, 8, 9]);
        assert_eq!(second.total_pages, 2);
    }

    #[test]
    fn test_concatenated_pages_reconstruct_input() {
        let items: Vec<u32> = (1..=17).collect();
        for page_size in 1..=18 {
            let total = paginate(&items, page_size, 1).unwrap().total_pages;
            let mut rebuilt = Vec::new();
            for page in 1..=total {
                rebuilt.extend_from_slice(paginate(&items, page_size, page).unwrap().items);
            }
            assert_eq!(rebuilt, items, "page_size {page_size}");
        }
    }

    #[test]
    fn test_empty_input_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 6, 1).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_out_of_range_fails() {
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(
            paginate(&items, 6, 3).unwrap_err(),
            ContentError::OutOfRange {
                page: 3,
                total_pages: 2
            }
        );
        assert!(paginate(&items, 6, 0).is_err());
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 6, 2).is_err());
    }

    #[test]
    fn test_zero_page_size_fails() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(paginate(&items, 0, 1).is_err());
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(paginate(&items, 4, 2), paginate(&items, 4, 2));
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = ListState::new();
        state.set_page(2, 2);
        assert_eq!(state.page, 2);
        state.set_search("react");
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "react");
    }

    #[test]
    fn test_tag_change_resets_page() {
        let mut state = ListState::new();
        state.set_page(2, 3);
        state.set_tag(Some("Vue".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(state.tag.as_deref(), Some("Vue"));
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = ListState::new();
        state.set_page(99, 4);
        assert_eq!(state.page, 4);
        state.set_page(0, 4);
        assert_eq!(state.page, 1);
        // No pages at all still pins the state to page 1.
        state.set_page(7, 0);
        assert_eq!(state.page, 1);
    }
}
