use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: i32,
    pub deck_id: i32,
    pub name: String,
    pub arcana: Arcana,
    pub suit: Option<String>,
    pub keywords: Vec<String>,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub created_at: NaiveDateTime,
}

/// Whether a card belongs to the major or minor arcana. Doubles as the
/// category label on the card list view.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arcana::Major => "major",
            Arcana::Minor => "minor",
        }
    }
}

impl Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Arcana {
    fn from(s: &str) -> Self {
        match s {
            "major" => Arcana::Major,
            _ => Arcana::Minor,
        }
    }
}

impl From<String> for Arcana {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCard {
    pub deck_id: i32,
    pub name: String,
    pub arcana: Arcana,
    pub suit: Option<String>,
    pub keywords: Vec<String>,
    pub upright_meaning: String,
    pub reversed_meaning: String,
}

impl NewCard {
    #[must_use]
    pub fn new(
        deck_id: i32,
        name: String,
        arcana: Arcana,
        suit: Option<String>,
        keywords: Vec<String>,
        upright_meaning: String,
        reversed_meaning: String,
    ) -> Self {
        Self {
            deck_id,
            name: name.trim().to_string(),
            arcana,
            suit: suit.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            keywords: keywords
                .into_iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            upright_meaning: upright_meaning.trim().to_string(),
            reversed_meaning: reversed_meaning.trim().to_string(),
        }
    }
}

impl Searchable for Card {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            self.suit.as_deref().unwrap_or(""),
            &self.upright_meaning,
            &self.reversed_meaning,
        ]
    }

    fn tag_fields(&self) -> Vec<&str> {
        self.keywords.iter().map(String::as_str).collect()
    }

    fn category(&self) -> Option<&str> {
        Some(self.arcana.as_str())
    }
}
