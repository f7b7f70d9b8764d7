use serde::Deserialize;
use validator::Validate;

use crate::domain::card::{Arcana, NewCard};

#[derive(Deserialize, Validate)]
/// Form data for adding a card to a deck.
pub struct AddCardForm {
    /// Deck the card belongs to.
    pub deck_id: i32,
    /// Card display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// `"major"` or `"minor"`; anything else is treated as minor.
    pub arcana: String,
    /// Suit for minor arcana cards.
    pub suit: Option<String>,
    /// Comma-separated keyword list.
    #[serde(default)]
    pub keywords: String,
    #[validate(length(min = 1))]
    pub upright_meaning: String,
    #[validate(length(min = 1))]
    pub reversed_meaning: String,
}

impl From<&AddCardForm> for NewCard {
    fn from(form: &AddCardForm) -> Self {
        let keywords = form
            .keywords
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        NewCard::new(
            form.deck_id,
            form.name.clone(),
            Arcana::from(form.arcana.as_str()),
            form.suit.clone(),
            keywords,
            form.upright_meaning.clone(),
            form.reversed_meaning.clone(),
        )
    }
}
