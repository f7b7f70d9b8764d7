use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::reading::Reading;

/// Aggregated data required to render the reading detail page.
pub struct ReadingPageData {
    pub reading: Reading,
    /// Deck catalog with cards, for the drawn-card editor.
    pub decks_with_cards: Vec<(Deck, Vec<Card>)>,
}
