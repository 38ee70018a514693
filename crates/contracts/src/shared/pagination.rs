//! Page-number strip and row numbering for server-paged lists.

use crate::shared::api::PaginationMeta;
use std::collections::BTreeSet;

/// Lists up to this many pages are shown without ellipsis.
const COMPACT_LIMIT: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Buttons to render between Prev and Next (pages are 1-based).
///
/// Always shows pages 1 and 2, the current page with its neighbours, and the
/// last page. A gap of one page is filled in; wider gaps collapse to an ellipsis.
pub fn page_numbers(current: u32, last: u32) -> Vec<PageItem> {
    if last == 0 {
        return Vec::new();
    }
    if last <= COMPACT_LIMIT {
        return (1..=last).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, last);
    let pages: BTreeSet<u32> = [1, 2, current.saturating_sub(1), current, current + 1, last]
        .into_iter()
        .filter(|p| (1..=last).contains(p))
        .collect();

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut prev = 0;
    for page in pages {
        if prev > 0 {
            match page - prev {
                2 => items.push(PageItem::Page(prev + 1)),
                gap if gap > 2 => items.push(PageItem::Ellipsis),
                _ => {}
            }
        }
        items.push(PageItem::Page(page));
        prev = page;
    }
    items
}

/// `(from, to)` for the "Showing from–to of total" label.
pub fn showing_range(meta: &PaginationMeta) -> (u64, u64) {
    if meta.total == 0 {
        return (0, 0);
    }
    let per = u64::from(meta.per_page.max(1));
    let cur = u64::from(meta.current_page.max(1));
    let from = (cur - 1) * per + 1;
    let to = (cur * per).min(meta.total);
    (from.min(meta.total), to)
}

pub fn showing_label(meta: &PaginationMeta) -> String {
    let (from, to) = showing_range(meta);
    format!("Showing {}–{} of {}", from, to, meta.total)
}

/// 1-based serial number of a row across pages.
pub fn row_number(meta: &PaginationMeta, index: usize) -> u64 {
    let per = u64::from(meta.per_page.max(1));
    let cur = u64::from(meta.current_page.max(1));
    (cur - 1) * per + index as u64 + 1
}

/// Target page clamped into `1..=last`.
pub fn clamp_page(page: i64, last: u32) -> u32 {
    page.clamp(1, i64::from(last.max(1))) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn meta(current_page: u32, per_page: u32, total: u64) -> PaginationMeta {
        PaginationMeta {
            current_page,
            per_page,
            total,
            last_page: ((total + u64::from(per_page) - 1) / u64::from(per_page)).max(1) as u32,
        }
    }

    #[test]
    fn test_few_pages_shown_in_full() {
        assert_eq!(
            page_numbers(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_first_page_of_many() {
        assert_eq!(page_numbers(1, 20), vec![Page(1), Page(2), Ellipsis, Page(20)]);
    }

    #[test]
    fn test_single_gap_is_filled() {
        // {1,2,3,4,5,20}: no gaps, then ellipsis before 20
        assert_eq!(
            page_numbers(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        // {1,2,4,5,6,20}: gap 2→4 filled with 3
        assert_eq!(
            page_numbers(5, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_middle_page_has_two_ellipses() {
        assert_eq!(
            page_numbers(10, 20),
            vec![Page(1), Page(2), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            page_numbers(20, 20),
            vec![Page(1), Page(2), Ellipsis, Page(19), Page(20)]
        );
        assert_eq!(
            page_numbers(18, 20),
            vec![Page(1), Page(2), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_showing_range() {
        assert_eq!(showing_range(&meta(1, 10, 25)), (1, 10));
        assert_eq!(showing_range(&meta(3, 10, 25)), (21, 25));
        assert_eq!(showing_range(&meta(1, 10, 0)), (0, 0));
        assert_eq!(showing_label(&meta(2, 10, 25)), "Showing 11–20 of 25");
    }

    #[test]
    fn test_row_number_continues_across_pages() {
        assert_eq!(row_number(&meta(1, 10, 25), 0), 1);
        assert_eq!(row_number(&meta(3, 10, 25), 4), 25);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(6, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
