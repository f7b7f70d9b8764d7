//! Repository implementation for the deck catalog.

use diesel::prelude::*;

use crate::domain::deck::{Deck, NewDeck, UpdateDeck};
use crate::models::deck::{
    Deck as DbDeck, NewDeck as DbNewDeck, UpdateDeck as DbUpdateDeck,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DeckReader, DeckWriter, DieselRepository};

impl DeckReader for DieselRepository {
    fn get_deck_by_id(&self, id: i32) -> RepositoryResult<Option<Deck>> {
        use crate::schema::decks;

        let mut conn = self.conn()?;
        let deck = decks::table
            .find(id)
            .select(DbDeck::as_select())
            .first::<DbDeck>(&mut conn)
            .optional()?;

        Ok(deck.map(Into::into))
    }

    fn list_decks(&self) -> RepositoryResult<Vec<Deck>> {
        use crate::schema::decks;

        let mut conn = self.conn()?;
        let decks = decks::table
            .order(decks::id.asc())
            .select(DbDeck::as_select())
            .load::<DbDeck>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(decks)
    }
}

impl DeckWriter for DieselRepository {
    fn create_decks(&self, new_decks: &[NewDeck]) -> RepositoryResult<usize> {
        use crate::schema::decks;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewDeck> = new_decks.iter().map(Into::into).collect();
        let affected = diesel::insert_into(decks::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_deck(&self, deck_id: i32, updates: &UpdateDeck) -> RepositoryResult<Deck> {
        use crate::schema::decks;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDeck = updates.into();

        let updated = diesel::update(decks::table.find(deck_id))
            .set(&db_updates)
            .get_result::<DbDeck>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_deck(&self, deck_id: i32) -> RepositoryResult<()> {
        use crate::schema::{cards, decks, reading_cards};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            let card_ids = cards::table
                .filter(cards::deck_id.eq(deck_id))
                .select(cards::id);
            diesel::delete(reading_cards::table.filter(reading_cards::card_id.eq_any(card_ids)))
                .execute(conn)?;
            diesel::delete(cards::table.filter(cards::deck_id.eq(deck_id))).execute(conn)?;
            diesel::delete(decks::table.find(deck_id)).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }
}
