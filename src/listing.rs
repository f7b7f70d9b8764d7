//! Search and filter layer feeding [`crate::pagination`].
//!
//! Every list view (decks, cards, readings) runs the same pipeline: fetch the
//! full scoped collection once, drop items that fail [`matches`], then slice
//! the surviving items with [`Paginated::new`]. Items opt in by implementing
//! [`Searchable`].

use crate::pagination::Paginated;

/// Sentinel category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Field accessors a list item exposes to the search pipeline.
pub trait Searchable {
    /// Direct text fields included in the haystack. Absent optional fields
    /// contribute an empty string.
    fn text_fields(&self) -> Vec<&str>;

    /// Tag-like fields (keywords, drawn card names) flattened into the
    /// haystack.
    fn tag_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Category label matched exactly against the selected category. Items
    /// without one only appear when the filter is [`ALL_CATEGORIES`].
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Lower-cased haystack built from all searchable fields of an item, joined
/// with single spaces.
pub fn normalize<T: Searchable>(item: &T) -> String {
    let mut parts = item.text_fields();
    parts.extend(item.tag_fields());
    parts.join(" ").to_lowercase()
}

/// User-controlled search, filter, and page state for one list view.
///
/// Changing the search term or category resets the page to 1; the page
/// itself is only clamped against the total once the filtered collection is
/// known, inside [`Paginated::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    category: String,
    current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.current_page = 1;
    }

    /// Jump straight to `page`. Values above the total are clamped later by
    /// the paginator.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn prev_page(&mut self) {
        self.current_page = (self.current_page - 1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = (self.current_page + 1).min(total_pages.max(1));
    }

    /// Builder form of [`Self::set_search_term`] for request handlers.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    /// Builder form of [`Self::set_category`] for request handlers.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    /// Builder form of [`Self::go_to_page`]; apply last so a page requested
    /// together with a filter is not reset.
    pub fn with_page(mut self, page: usize) -> Self {
        self.go_to_page(page);
        self
    }
}

/// Whether `item` survives both the category filter and the search term.
///
/// A whitespace-only search term matches everything, exactly like an empty
/// one. Search is plain substring containment over the normalized haystack;
/// the category comparison is exact and case-sensitive.
pub fn matches<T: Searchable>(item: &T, state: &QueryState) -> bool {
    if state.category != ALL_CATEGORIES && item.category() != Some(state.category.as_str()) {
        return false;
    }

    let term = state.search_term.trim();
    term.is_empty() || normalize(item).contains(&term.to_lowercase())
}

/// Runs the full pipeline: filter `items` by `state`, then slice out the
/// requested page.
pub fn select<T: Searchable>(items: Vec<T>, state: &QueryState, per_page: usize) -> Paginated<T> {
    let filtered: Vec<T> = items
        .into_iter()
        .filter(|item| matches(item, state))
        .collect();
    Paginated::new(filtered, state.current_page(), per_page)
}
