use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::deck::{
    Deck as DomainDeck, NewDeck as DomainNewDeck, UpdateDeck as DomainUpdateDeck,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::decks)]
/// Diesel model for [`crate::domain::deck::Deck`].
pub struct Deck {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::decks)]
/// Insertable form of [`Deck`].
pub struct NewDeck<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::decks)]
/// Data used when updating a [`Deck`] record.
pub struct UpdateDeck<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl From<Deck> for DomainDeck {
    fn from(deck: Deck) -> Self {
        Self {
            id: deck.id,
            name: deck.name,
            description: deck.description,
            created_at: deck.created_at,
            updated_at: deck.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDeck> for NewDeck<'a> {
    fn from(deck: &'a DomainNewDeck) -> Self {
        Self {
            name: deck.name.as_str(),
            description: deck.description.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDeck> for UpdateDeck<'a> {
    fn from(deck: &'a DomainUpdateDeck) -> Self {
        Self {
            name: deck.name.as_str(),
            description: deck.description.as_deref(),
        }
    }
}
