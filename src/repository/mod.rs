//! Repository traits and their Diesel implementation.
//!
//! Repositories return fully materialized, ordered domain collections; the
//! search, category filter, and pagination applied on top of them live in
//! [`crate::listing`] and run in memory. Readings are always scoped to their
//! owner's email.

use crate::db::{DbConnection, DbPool};
use crate::domain::card::{Card, NewCard};
use crate::domain::deck::{Deck, NewDeck, UpdateDeck};
use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod card;
pub mod deck;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod reading;

pub trait DeckReader {
    fn get_deck_by_id(&self, id: i32) -> RepositoryResult<Option<Deck>>;
    /// All decks ordered by identifier.
    fn list_decks(&self) -> RepositoryResult<Vec<Deck>>;
}

pub trait DeckWriter {
    fn create_decks(&self, new_decks: &[NewDeck]) -> RepositoryResult<usize>;
    fn update_deck(&self, deck_id: i32, updates: &UpdateDeck) -> RepositoryResult<Deck>;
    fn delete_deck(&self, deck_id: i32) -> RepositoryResult<()>;
}

pub trait CardReader {
    fn get_card_by_id(&self, id: i32) -> RepositoryResult<Option<Card>>;
    /// All cards of one deck ordered by identifier.
    fn list_cards(&self, deck_id: i32) -> RepositoryResult<Vec<Card>>;
}

pub trait CardWriter {
    fn create_cards(&self, new_cards: &[NewCard]) -> RepositoryResult<usize>;
    fn delete_card(&self, card_id: i32) -> RepositoryResult<()>;
}

pub trait ReadingReader {
    fn get_reading_by_id(&self, id: i32) -> RepositoryResult<Option<Reading>>;
    /// All readings of one user, newest first.
    fn list_readings(&self, user_email: &str) -> RepositoryResult<Vec<Reading>>;
}

pub trait ReadingWriter {
    fn create_reading(&self, new_reading: &NewReading) -> RepositoryResult<Reading>;
    fn update_reading(&self, reading_id: i32, updates: &UpdateReading)
    -> RepositoryResult<Reading>;
    fn delete_reading(&self, reading_id: i32) -> RepositoryResult<()>;
    /// Records the stored image path for a reading.
    fn set_reading_image(&self, reading_id: i32, image: &str) -> RepositoryResult<Reading>;
}

/// Diesel-backed implementation of all repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(RepositoryError::from)
    }
}
