use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::Searchable;

/// A journal entry describing one tarot reading.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub id: i32,
    pub user_email: String,
    pub title: String,
    pub content: String,
    pub interpretation: Option<String>,
    pub category: String,
    /// Stored path of the attached image, if any.
    pub image: Option<String>,
    /// Names of the drawn cards in draw order.
    pub cards: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReading {
    pub user_email: String,
    pub title: String,
    pub content: String,
    pub interpretation: Option<String>,
    pub category: String,
    /// Identifiers of the drawn cards in draw order.
    pub card_ids: Vec<i32>,
}

impl NewReading {
    /// Normalizes user input and sanitizes the rich-text fields.
    #[must_use]
    pub fn new(
        user_email: String,
        title: String,
        content: String,
        interpretation: Option<String>,
        category: String,
        card_ids: Vec<i32>,
    ) -> Self {
        Self {
            user_email: user_email.trim().to_lowercase(),
            title: title.trim().to_string(),
            content: ammonia::clean(content.trim()),
            interpretation: interpretation
                .map(|s| ammonia::clean(s.trim()))
                .filter(|s| !s.is_empty()),
            category: category.trim().to_string(),
            card_ids,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateReading {
    pub title: String,
    pub content: String,
    pub interpretation: Option<String>,
    pub category: String,
    pub card_ids: Vec<i32>,
}

impl UpdateReading {
    #[must_use]
    pub fn new(
        title: String,
        content: String,
        interpretation: Option<String>,
        category: String,
        card_ids: Vec<i32>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            content: ammonia::clean(content.trim()),
            interpretation: interpretation
                .map(|s| ammonia::clean(s.trim()))
                .filter(|s| !s.is_empty()),
            category: category.trim().to_string(),
            card_ids,
        }
    }
}

impl Searchable for Reading {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.content,
            self.interpretation.as_deref().unwrap_or(""),
        ]
    }

    fn tag_fields(&self) -> Vec<&str> {
        self.cards.iter().map(String::as_str).collect()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{QueryState, matches};

    fn sample_reading(title: &str, category: &str) -> Reading {
        Reading {
            id: 1,
            user_email: "seeker@example.com".to_string(),
            title: title.to_string(),
            content: "Three card spread before the interview".to_string(),
            interpretation: None,
            category: category.to_string(),
            image: None,
            cards: vec!["The Sun".to_string(), "The Tower".to_string()],
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn new_reading_sanitizes_markup() {
        let reading = NewReading::new(
            " Seeker@Example.com ".to_string(),
            "Morning draw".to_string(),
            "Fresh start <script>alert(1)</script>".to_string(),
            Some("<b>bold</b> outlook".to_string()),
            "Career".to_string(),
            vec![1, 2],
        );

        assert_eq!(reading.user_email, "seeker@example.com");
        assert!(!reading.content.contains("<script>"));
        assert!(reading.content.contains("Fresh start"));
        assert_eq!(reading.interpretation.as_deref(), Some("<b>bold</b> outlook"));
    }

    #[test]
    fn empty_interpretation_becomes_none() {
        let reading = NewReading::new(
            "a@b.com".to_string(),
            "t".to_string(),
            "c".to_string(),
            Some("   ".to_string()),
            "General".to_string(),
            Vec::new(),
        );
        assert_eq!(reading.interpretation, None);
    }

    #[test]
    fn drawn_card_names_are_searchable() {
        let reading = sample_reading("Quiet morning", "General");
        let mut state = QueryState::new();
        state.set_search_term("tower");
        assert!(matches(&reading, &state));
    }

    #[test]
    fn category_filter_scopes_readings() {
        let love = sample_reading("A", "Love / Relationships");
        let career = sample_reading("B", "Career");

        let mut state = QueryState::new();
        state.set_category("Love / Relationships");
        assert!(matches(&love, &state));
        assert!(!matches(&career, &state));
    }
}
