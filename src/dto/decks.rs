use serde::Deserialize;

use crate::domain::deck::Deck;
use crate::pagination::Paginated;

/// Query parameters accepted by the deck catalog page.
#[derive(Debug, Default, Deserialize)]
pub struct DecksQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the deck catalog template.
pub struct DecksPageData {
    pub decks: Paginated<Deck>,
    pub search_query: Option<String>,
}
