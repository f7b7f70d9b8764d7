//! Repository implementation for cards.

use diesel::prelude::*;

use crate::domain::card::{Card, NewCard};
use crate::models::card::{Card as DbCard, NewCard as DbNewCard};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CardReader, CardWriter, DieselRepository};

impl CardReader for DieselRepository {
    fn get_card_by_id(&self, id: i32) -> RepositoryResult<Option<Card>> {
        use crate::schema::cards;

        let mut conn = self.conn()?;
        let card = cards::table
            .find(id)
            .select(DbCard::as_select())
            .first::<DbCard>(&mut conn)
            .optional()?;

        Ok(card.map(Into::into))
    }

    fn list_cards(&self, deck_id: i32) -> RepositoryResult<Vec<Card>> {
        use crate::schema::cards;

        let mut conn = self.conn()?;
        let cards = cards::table
            .filter(cards::deck_id.eq(deck_id))
            .order(cards::id.asc())
            .select(DbCard::as_select())
            .load::<DbCard>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(cards)
    }
}

impl CardWriter for DieselRepository {
    fn create_cards(&self, new_cards: &[NewCard]) -> RepositoryResult<usize> {
        use crate::schema::cards;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewCard> = new_cards.iter().map(Into::into).collect();
        let affected = diesel::insert_into(cards::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_card(&self, card_id: i32) -> RepositoryResult<()> {
        use crate::schema::{cards, reading_cards};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(reading_cards::table.filter(reading_cards::card_id.eq(card_id)))
                .execute(conn)?;
            diesel::delete(cards::table.find(card_id)).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }
}
