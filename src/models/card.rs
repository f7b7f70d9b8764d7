use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::card::{Arcana, Card as DomainCard, NewCard as DomainNewCard};
use crate::models::deck::Deck;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::cards)]
#[diesel(belongs_to(Deck, foreign_key = deck_id))]
/// Diesel model for [`crate::domain::card::Card`].
pub struct Card {
    pub id: i32,
    pub deck_id: i32,
    pub name: String,
    pub arcana: String,
    pub suit: Option<String>,
    /// JSON-encoded list of keyword strings.
    pub keywords: String,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cards)]
/// Insertable form of [`Card`].
pub struct NewCard<'a> {
    pub deck_id: i32,
    pub name: &'a str,
    pub arcana: String,
    pub suit: Option<&'a str>,
    pub keywords: String,
    pub upright_meaning: &'a str,
    pub reversed_meaning: &'a str,
}

impl From<Card> for DomainCard {
    fn from(card: Card) -> Self {
        // Keywords written before the JSON encoding was introduced fall back
        // to a single raw keyword.
        let keywords: Vec<String> = serde_json::from_str(&card.keywords).unwrap_or_else(|_| {
            if card.keywords.is_empty() {
                Vec::new()
            } else {
                vec![card.keywords.clone()]
            }
        });
        Self {
            id: card.id,
            deck_id: card.deck_id,
            name: card.name,
            arcana: Arcana::from(card.arcana),
            suit: card.suit,
            keywords,
            upright_meaning: card.upright_meaning,
            reversed_meaning: card.reversed_meaning,
            created_at: card.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCard> for NewCard<'a> {
    fn from(card: &'a DomainNewCard) -> Self {
        Self {
            deck_id: card.deck_id,
            name: card.name.as_str(),
            arcana: card.arcana.to_string(),
            suit: card.suit.as_deref(),
            keywords: serde_json::to_string(&card.keywords).unwrap_or_else(|_| "[]".to_string()),
            upright_meaning: card.upright_meaning.as_str(),
            reversed_meaning: card.reversed_meaning.as_str(),
        }
    }
}
