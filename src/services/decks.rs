use validator::Validate;

use crate::dto::decks::{DecksPageData, DecksQuery};
use crate::forms::decks::AddDeckForm;
use crate::listing::{self, QueryState};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{DeckReader, DeckWriter};
use crate::routes::ensure_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the deck catalog page.
pub fn load_decks_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: DecksQuery,
) -> ServiceResult<DecksPageData>
where
    R: DeckReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let decks = repo.list_decks().map_err(|err| {
        log::error!("Failed to list decks: {err}");
        err
    })?;

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let state = QueryState::new()
        .with_search_term(search_query.clone().unwrap_or_default())
        .with_page(query.page.unwrap_or(1));

    let decks = listing::select(decks, &state, DEFAULT_ITEMS_PER_PAGE);

    Ok(DecksPageData {
        decks,
        search_query,
    })
}

/// Validates the add-deck form and persists a new catalog deck.
pub fn add_deck<R>(repo: &R, user: &AuthenticatedUser, form: AddDeckForm) -> ServiceResult<()>
where
    R: DeckWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    repo.create_decks(&[(&form).into()]).map_err(|err| {
        log::error!("Failed to add a deck: {err}");
        err
    })?;

    Ok(())
}

/// Removes a deck together with its cards.
pub fn delete_deck<R>(repo: &R, user: &AuthenticatedUser, deck_id: i32) -> ServiceResult<()>
where
    R: DeckWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    repo.delete_deck(deck_id).map_err(|err| {
        log::error!("Failed to delete deck {deck_id}: {err}");
        err
    })?;

    Ok(())
}
