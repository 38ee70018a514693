//! Page categories of tab pages.
//!
//! The root element of a tab page carries `id="{tab}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector leads straight
//! to its `domain/aNNN_*` directory.

/// Paged table with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Add / edit form of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// `{tab}--{category}`
pub fn page_id(tab_key: &str, category: &str) -> String {
    format!("{}--{}", tab_key, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(page_id("a004_design", PAGE_CAT_LIST), "a004_design--list");
        assert_eq!(page_id("a004_design_new", PAGE_CAT_DETAIL), "a004_design_new--detail");
    }
}
