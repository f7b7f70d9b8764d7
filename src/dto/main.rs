use serde::Deserialize;

use crate::domain::reading::Reading;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Optional category filter; absent means all categories.
    pub category: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Paginated readings of the signed-in user.
    pub readings: Paginated<Reading>,
    /// Category labels present in the user's journal, for the filter select.
    pub categories: Vec<String>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Currently selected category, the `"all"` sentinel by default.
    pub category: String,
}
