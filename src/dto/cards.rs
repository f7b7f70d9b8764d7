use serde::Deserialize;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::pagination::Paginated;

/// Query parameters accepted by the card list page.
#[derive(Debug, Default, Deserialize)]
pub struct CardsQuery {
    pub search: Option<String>,
    /// Arcana filter, `"major"`, `"minor"`, or absent for all.
    pub arcana: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the card list template.
pub struct CardsPageData {
    pub deck: Deck,
    pub cards: Paginated<Card>,
    pub search_query: Option<String>,
    pub arcana: String,
}
