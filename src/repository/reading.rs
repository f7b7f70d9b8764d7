//! Repository implementation for journal readings.

use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::models::reading::{
    NewReading as DbNewReading, Reading as DbReading, ReadingCard as DbReadingCard,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReadingReader, ReadingWriter};

/// Loads the drawn card names for the given readings, keyed by reading id
/// and ordered by draw position.
fn load_card_names(
    conn: &mut SqliteConnection,
    reading_ids: &[i32],
) -> Result<HashMap<i32, Vec<String>>, diesel::result::Error> {
    use crate::schema::{cards, reading_cards};

    let rows: Vec<(i32, String)> = reading_cards::table
        .inner_join(cards::table)
        .filter(reading_cards::reading_id.eq_any(reading_ids))
        .order((reading_cards::reading_id.asc(), reading_cards::position.asc()))
        .select((reading_cards::reading_id, cards::name))
        .load(conn)?;

    let mut names: HashMap<i32, Vec<String>> = HashMap::new();
    for (reading_id, name) in rows {
        names.entry(reading_id).or_default().push(name);
    }
    Ok(names)
}

fn replace_drawn_cards(
    conn: &mut SqliteConnection,
    reading_id: i32,
    card_ids: &[i32],
) -> Result<(), diesel::result::Error> {
    use crate::schema::reading_cards;

    diesel::delete(reading_cards::table.filter(reading_cards::reading_id.eq(reading_id)))
        .execute(conn)?;

    if card_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<DbReadingCard> = card_ids
        .iter()
        .enumerate()
        .map(|(position, card_id)| DbReadingCard {
            reading_id,
            card_id: *card_id,
            position: position as i32,
        })
        .collect();

    diesel::insert_into(reading_cards::table)
        .values(rows)
        .execute(conn)?;

    Ok(())
}

impl ReadingReader for DieselRepository {
    fn get_reading_by_id(&self, id: i32) -> RepositoryResult<Option<Reading>> {
        use crate::schema::readings;

        let mut conn = self.conn()?;
        let reading = readings::table
            .find(id)
            .select(DbReading::as_select())
            .first::<DbReading>(&mut conn)
            .optional()?;

        let Some(reading) = reading else {
            return Ok(None);
        };

        let mut names = load_card_names(&mut conn, &[reading.id])?;
        let cards = names.remove(&reading.id).unwrap_or_default();

        Ok(Some(reading.into_domain(cards)))
    }

    fn list_readings(&self, user_email: &str) -> RepositoryResult<Vec<Reading>> {
        use crate::schema::readings;

        let mut conn = self.conn()?;
        let rows = readings::table
            .filter(readings::user_email.eq(user_email))
            .order((readings::created_at.desc(), readings::id.desc()))
            .select(DbReading::as_select())
            .load::<DbReading>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut names = load_card_names(&mut conn, &ids)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let cards = names.remove(&row.id).unwrap_or_default();
                row.into_domain(cards)
            })
            .collect())
    }
}

impl ReadingWriter for DieselRepository {
    fn create_reading(&self, new_reading: &NewReading) -> RepositoryResult<Reading> {
        use crate::schema::readings;

        let mut conn = self.conn()?;

        let created = conn.transaction::<DbReading, diesel::result::Error, _>(|conn| {
            let db_new: DbNewReading = new_reading.into();
            let created = diesel::insert_into(readings::table)
                .values(&db_new)
                .get_result::<DbReading>(conn)?;

            replace_drawn_cards(conn, created.id, &new_reading.card_ids)?;
            Ok(created)
        })?;

        let mut names = load_card_names(&mut conn, &[created.id])?;
        let cards = names.remove(&created.id).unwrap_or_default();

        Ok(created.into_domain(cards))
    }

    fn update_reading(
        &self,
        reading_id: i32,
        updates: &UpdateReading,
    ) -> RepositoryResult<Reading> {
        use crate::schema::readings;

        let mut conn = self.conn()?;

        let updated = conn.transaction::<DbReading, diesel::result::Error, _>(|conn| {
            let changeset = updates.as_changeset(Utc::now().naive_utc());
            let updated = diesel::update(readings::table.find(reading_id))
                .set(&changeset)
                .get_result::<DbReading>(conn)?;

            replace_drawn_cards(conn, reading_id, &updates.card_ids)?;
            Ok(updated)
        })?;

        let mut names = load_card_names(&mut conn, &[updated.id])?;
        let cards = names.remove(&updated.id).unwrap_or_default();

        Ok(updated.into_domain(cards))
    }

    fn delete_reading(&self, reading_id: i32) -> RepositoryResult<()> {
        use crate::schema::{reading_cards, readings};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(
                reading_cards::table.filter(reading_cards::reading_id.eq(reading_id)),
            )
            .execute(conn)?;
            diesel::delete(readings::table.find(reading_id)).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }

    fn set_reading_image(&self, reading_id: i32, image: &str) -> RepositoryResult<Reading> {
        use crate::schema::readings;

        let mut conn = self.conn()?;
        let updated = diesel::update(readings::table.find(reading_id))
            .set(readings::image.eq(image))
            .get_result::<DbReading>(&mut conn)?;

        let mut names = load_card_names(&mut conn, &[updated.id])?;
        let cards = names.remove(&updated.id).unwrap_or_default();

        Ok(updated.into_domain(cards))
    }
}
