use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::reading::{NewReading, UpdateReading};

/// Parses the comma-separated id list submitted by the drawn-card picker.
/// Unparseable entries are dropped.
fn parse_card_ids(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

#[derive(Deserialize, Validate)]
/// Form data for recording a new reading.
pub struct AddReadingForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub interpretation: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
    /// Comma-separated identifiers of the drawn cards in draw order.
    #[serde(default)]
    pub card_ids: String,
}

impl AddReadingForm {
    /// Builds the sanitized domain payload owned by `user_email`.
    pub fn to_new_reading(&self, user_email: &str) -> NewReading {
        NewReading::new(
            user_email.to_string(),
            self.title.clone(),
            self.content.clone(),
            self.interpretation.clone(),
            self.category.clone(),
            parse_card_ids(&self.card_ids),
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing reading.
pub struct SaveReadingForm {
    /// Reading identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub interpretation: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
    /// Comma-separated identifiers of the drawn cards in draw order.
    #[serde(default)]
    pub card_ids: String,
}

impl From<&SaveReadingForm> for UpdateReading {
    fn from(form: &SaveReadingForm) -> Self {
        UpdateReading::new(
            form.title.clone(),
            form.content.clone(),
            form.interpretation.clone(),
            form.category.clone(),
            parse_card_ids(&form.card_ids),
        )
    }
}

#[derive(MultipartForm)]
/// Image attachment uploaded for a reading.
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
}
