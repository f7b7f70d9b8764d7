//! In-memory pagination shared by every list view.

use serde::Serialize;

/// Number of items rendered per page on list views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Maximum number of numbered page buttons visible at once.
pub const MAX_PAGE_BUTTONS: usize = 10;

/// Total page count for `item_count` items at `per_page` items per page.
///
/// An empty collection still reports one nominal page so callers never see a
/// zero-page state.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    assert!(per_page > 0, "per_page must be positive");
    item_count.div_ceil(per_page).max(1)
}

/// The contiguous range of page numbers rendered as buttons.
///
/// Windows are aligned to `max_buttons`-sized groups: pages 1..=10 share one
/// window, 11..=20 the next, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start_page: usize,
    pub end_page: usize,
    /// More pages exist beyond `end_page`; render a trailing ellipsis.
    pub has_more: bool,
}

/// Computes the button window for `current_page` out of `total_pages`.
pub fn page_window(current_page: usize, total_pages: usize, max_buttons: usize) -> PageWindow {
    assert!(max_buttons > 0, "max_buttons must be positive");
    let current_page = current_page.clamp(1, total_pages.max(1));
    let group = (current_page - 1) / max_buttons;
    let start_page = group * max_buttons + 1;
    let end_page = (start_page + max_buttons - 1).min(total_pages.max(1));
    PageWindow {
        start_page,
        end_page,
        has_more: end_page < total_pages,
    }
}

/// One page of a filtered collection plus everything a template needs to
/// render the pagination strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// The clamped current page, always in `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
    /// Numbered buttons to render, `window.start_page..=window.end_page`.
    pub pages: Vec<usize>,
    pub window: PageWindow,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Slices one page out of an already filtered, already ordered
    /// collection.
    ///
    /// Out-of-range `current_page` values are clamped rather than rejected.
    /// The input order is preserved; this never re-sorts.
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize) -> Self {
        let total_pages = total_pages(items.len(), per_page);
        let page = current_page.clamp(1, total_pages);

        let start = (page - 1) * per_page;
        let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

        let window = page_window(page, total_pages, MAX_PAGE_BUTTONS);

        Self {
            items,
            page,
            total_pages,
            pages: (window.start_page..=window.end_page).collect(),
            window,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}
