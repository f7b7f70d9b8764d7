use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use uuid::Uuid;
use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::reading::Reading;
use crate::dto::readings::ReadingPageData;
use crate::forms::readings::{AddReadingForm, SaveReadingForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CardReader, DeckReader, ReadingReader, ReadingWriter};
use crate::routes::ensure_role;
use crate::services::{ServiceError, ServiceResult};

/// Fetches a reading and verifies the caller owns it.
fn get_owned_reading<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reading_id: i32,
) -> ServiceResult<Reading>
where
    R: ReadingReader + ?Sized,
{
    let reading = repo
        .get_reading_by_id(reading_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if reading.user_email != user.email.to_lowercase() {
        return Err(ServiceError::Unauthorized);
    }

    Ok(reading)
}

/// Loads the reading detail page with the card catalog for editing.
pub fn load_reading_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reading_id: i32,
) -> ServiceResult<ReadingPageData>
where
    R: ReadingReader + DeckReader + CardReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let reading = get_owned_reading(repo, user, reading_id)?;

    let decks = repo.list_decks().map_err(|err| {
        log::error!("Failed to list decks: {err}");
        err
    })?;

    let mut decks_with_cards = Vec::with_capacity(decks.len());
    for deck in decks {
        let cards = repo.list_cards(deck.id).map_err(ServiceError::from)?;
        decks_with_cards.push((deck, cards));
    }

    Ok(ReadingPageData {
        reading,
        decks_with_cards,
    })
}

/// Validates the add-reading form and records a new journal entry.
pub fn add_reading<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddReadingForm,
) -> ServiceResult<Reading>
where
    R: ReadingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    let new_reading = form.to_new_reading(&user.email);

    repo.create_reading(&new_reading).map_err(|err| {
        log::error!("Failed to add a reading: {err}");
        ServiceError::from(err)
    })
}

/// Applies edits to an owned reading.
pub fn save_reading<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveReadingForm,
) -> ServiceResult<Reading>
where
    R: ReadingReader + ReadingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    get_owned_reading(repo, user, form.id)?;

    repo.update_reading(form.id, &(&form).into()).map_err(|err| {
        log::error!("Failed to update reading {}: {err}", form.id);
        ServiceError::from(err)
    })
}

/// Removes an owned reading and its stored image, if any.
pub fn delete_reading<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reading_id: i32,
    upload_dir: &str,
) -> ServiceResult<()>
where
    R: ReadingReader + ReadingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let reading = get_owned_reading(repo, user, reading_id)?;

    repo.delete_reading(reading_id).map_err(|err| {
        log::error!("Failed to delete reading {reading_id}: {err}");
        err
    })?;

    if let Some(image) = reading.image {
        let path = Path::new(upload_dir).join(image);
        if let Err(err) = std::fs::remove_file(&path) {
            log::warn!("Failed to remove image {}: {err}", path.display());
        }
    }

    Ok(())
}

/// Stores an uploaded image under the upload directory and links it to an
/// owned reading.
pub fn attach_image<R>(
    repo: &R,
    user: &AuthenticatedUser,
    reading_id: i32,
    image: TempFile,
    upload_dir: &str,
) -> ServiceResult<Reading>
where
    R: ReadingReader + ReadingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    get_owned_reading(repo, user, reading_id)?;

    let extension = image
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .unwrap_or("bin")
        .to_lowercase();
    let stored_name = format!("{}.{extension}", Uuid::new_v4());

    std::fs::create_dir_all(upload_dir)
        .map_err(|err| ServiceError::Upload(format!("Ошибка при сохранении файла: {err}")))?;

    let destination = Path::new(upload_dir).join(&stored_name);
    std::fs::copy(image.file.path(), &destination)
        .map_err(|err| ServiceError::Upload(format!("Ошибка при сохранении файла: {err}")))?;

    repo.set_reading_image(reading_id, &stored_name).map_err(|err| {
        log::error!("Failed to attach image to reading {reading_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn owner() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "seeker@example.com".to_string(),
            name: "Seeker".to_string(),
            roles: vec!["tarot".to_string()],
            exp: 0,
        }
    }

    fn stranger() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "other@example.com".to_string(),
            name: "Other".to_string(),
            roles: vec!["tarot".to_string()],
            exp: 0,
        }
    }

    fn reading(id: i32) -> Reading {
        Reading {
            id,
            user_email: "seeker@example.com".to_string(),
            title: "Morning draw".to_string(),
            content: "content".to_string(),
            interpretation: None,
            category: "General".to_string(),
            image: None,
            cards: Vec::new(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn readings_of_other_users_stay_hidden() {
        let mut repo = MockRepository::new();
        repo.expect_get_reading_by_id()
            .times(1)
            .returning(|id| Ok(Some(reading(id))));
        repo.expect_list_decks().times(0);

        let result = load_reading_page(&repo, &stranger(), 5);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn missing_reading_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_reading_by_id().times(1).returning(|_| Ok(None));

        let result = load_reading_page(&repo, &owner(), 5);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn add_reading_sanitizes_and_persists() {
        let mut repo = MockRepository::new();
        repo.expect_create_reading()
            .withf(|new_reading| {
                new_reading.user_email == "seeker@example.com"
                    && !new_reading.content.contains("<script>")
                    && new_reading.card_ids == vec![1, 2]
            })
            .times(1)
            .returning(|_| Ok(reading(1)));

        let form = AddReadingForm {
            title: "Morning draw".to_string(),
            content: "Fresh start <script>alert(1)</script>".to_string(),
            interpretation: None,
            category: "General".to_string(),
            card_ids: "1,2".to_string(),
        };

        add_reading(&repo, &owner(), form).expect("should add reading");
    }

    #[test]
    fn save_checks_ownership_before_updating() {
        let mut repo = MockRepository::new();
        repo.expect_get_reading_by_id()
            .times(1)
            .returning(|id| Ok(Some(reading(id))));
        repo.expect_update_reading().times(0);

        let form = SaveReadingForm {
            id: 3,
            title: "Edited".to_string(),
            content: "c".to_string(),
            interpretation: None,
            category: "General".to_string(),
            card_ids: String::new(),
        };
        let result = save_reading(&repo, &stranger(), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn delete_removes_owned_reading() {
        let mut repo = MockRepository::new();
        repo.expect_get_reading_by_id()
            .times(1)
            .returning(|id| Ok(Some(reading(id))));
        repo.expect_delete_reading()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(()));

        delete_reading(&repo, &owner(), 3, "/tmp/uploads").expect("should delete reading");
    }
}
