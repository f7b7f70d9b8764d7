use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reading::{
    NewReading as DomainNewReading, Reading as DomainReading,
    UpdateReading as DomainUpdateReading,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::readings)]
/// Diesel model for [`crate::domain::reading::Reading`].
pub struct Reading {
    pub id: i32,
    pub user_email: String,
    pub title: String,
    pub content: String,
    pub interpretation: Option<String>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::readings)]
/// Insertable form of [`Reading`].
pub struct NewReading<'a> {
    pub user_email: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub interpretation: Option<&'a str>,
    pub category: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::readings)]
/// Data used when updating a [`Reading`] record.
pub struct UpdateReading<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub interpretation: Option<&'a str>,
    pub category: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::reading_cards)]
#[diesel(belongs_to(Reading, foreign_key = reading_id))]
#[diesel(primary_key(reading_id, position))]
/// Join row linking a reading to one drawn card.
pub struct ReadingCard {
    pub reading_id: i32,
    pub card_id: i32,
    pub position: i32,
}

impl Reading {
    /// Builds the domain reading once the drawn card names are known.
    pub fn into_domain(self, cards: Vec<String>) -> DomainReading {
        DomainReading {
            id: self.id,
            user_email: self.user_email,
            title: self.title,
            content: self.content,
            interpretation: self.interpretation,
            category: self.category,
            image: self.image,
            cards,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewReading> for NewReading<'a> {
    fn from(reading: &'a DomainNewReading) -> Self {
        Self {
            user_email: reading.user_email.as_str(),
            title: reading.title.as_str(),
            content: reading.content.as_str(),
            interpretation: reading.interpretation.as_deref(),
            category: reading.category.as_str(),
        }
    }
}

impl DomainUpdateReading {
    /// Changeset stamped with the current time.
    pub fn as_changeset(&self, now: NaiveDateTime) -> UpdateReading<'_> {
        UpdateReading {
            title: self.title.as_str(),
            content: self.content.as_str(),
            interpretation: self.interpretation.as_deref(),
            category: self.category.as_str(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_newreading() {
        let domain = DomainNewReading::new(
            "seeker@example.com".to_string(),
            "Morning draw".to_string(),
            "Three cards".to_string(),
            None,
            "General".to_string(),
            vec![1, 2, 3],
        );
        let new: NewReading = (&domain).into();
        assert_eq!(new.user_email, "seeker@example.com");
        assert_eq!(new.title, "Morning draw");
        assert_eq!(new.interpretation, None);
        assert_eq!(new.category, "General");
    }

    #[test]
    fn reading_into_domain_attaches_card_names() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_reading = Reading {
            id: 9,
            user_email: "seeker@example.com".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            interpretation: Some("i".to_string()),
            category: "Love / Relationships".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        };
        let domain = db_reading.into_domain(vec!["The Sun".to_string()]);
        assert_eq!(domain.id, 9);
        assert_eq!(domain.cards, vec!["The Sun".to_string()]);
        assert_eq!(domain.category, "Love / Relationships");
    }
}
