use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDeck {
    pub name: String,
    pub description: Option<String>,
}

impl NewDeck {
    #[must_use]
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDeck {
    pub name: String,
    pub description: Option<String>,
}

impl UpdateDeck {
    #[must_use]
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

impl Searchable for Deck {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.name, self.description.as_deref().unwrap_or("")]
    }
}
