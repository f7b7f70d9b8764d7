use validator::Validate;

use crate::dto::cards::{CardsPageData, CardsQuery};
use crate::forms::cards::AddCardForm;
use crate::listing::{self, ALL_CATEGORIES, QueryState};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CardReader, CardWriter, DeckReader};
use crate::routes::ensure_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads one deck's card list page.
pub fn load_cards_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    deck_id: i32,
    query: CardsQuery,
) -> ServiceResult<CardsPageData>
where
    R: DeckReader + CardReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let deck = repo
        .get_deck_by_id(deck_id)
        .map_err(|err| {
            log::error!("Failed to get deck {deck_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let cards = repo.list_cards(deck_id).map_err(|err| {
        log::error!("Failed to list cards of deck {deck_id}: {err}");
        err
    })?;

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let arcana = query
        .arcana
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let state = QueryState::new()
        .with_search_term(search_query.clone().unwrap_or_default())
        .with_category(arcana.clone())
        .with_page(query.page.unwrap_or(1));

    let cards = listing::select(cards, &state, DEFAULT_ITEMS_PER_PAGE);

    Ok(CardsPageData {
        deck,
        cards,
        search_query,
        arcana,
    })
}

/// Validates the add-card form and persists a new card.
pub fn add_card<R>(repo: &R, user: &AuthenticatedUser, form: AddCardForm) -> ServiceResult<()>
where
    R: DeckReader + CardWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Ошибка валидации формы".to_string()));
    }

    if repo
        .get_deck_by_id(form.deck_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.create_cards(&[(&form).into()]).map_err(|err| {
        log::error!("Failed to add a card: {err}");
        err
    })?;

    Ok(())
}

/// Removes a card from its deck.
pub fn delete_card<R>(repo: &R, user: &AuthenticatedUser, card_id: i32) -> ServiceResult<()>
where
    R: CardWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    repo.delete_card(card_id).map_err(|err| {
        log::error!("Failed to delete card {card_id}: {err}");
        err
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Arcana, Card};
    use crate::domain::deck::Deck;
    use crate::repository::mock::MockRepository;

    fn viewer() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "viewer@example.com".to_string(),
            name: "Viewer".to_string(),
            roles: vec!["tarot".to_string()],
            exp: 0,
        }
    }

    fn deck() -> Deck {
        Deck {
            id: 1,
            name: "Rider-Waite".to_string(),
            description: None,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn card(id: i32, name: &str, arcana: Arcana) -> Card {
        Card {
            id,
            deck_id: 1,
            name: name.to_string(),
            arcana,
            suit: None,
            keywords: Vec::new(),
            upright_meaning: "up".to_string(),
            reversed_meaning: "down".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn unknown_deck_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_deck_by_id().times(1).returning(|_| Ok(None));
        repo.expect_list_cards().times(0);

        let result = load_cards_page(&repo, &viewer(), 9, CardsQuery::default());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn arcana_filter_narrows_the_list() {
        let mut repo = MockRepository::new();
        repo.expect_get_deck_by_id()
            .times(1)
            .returning(|_| Ok(Some(deck())));
        repo.expect_list_cards().times(1).returning(|_| {
            Ok(vec![
                card(1, "The Sun", Arcana::Major),
                card(2, "Two of Cups", Arcana::Minor),
            ])
        });

        let query = CardsQuery {
            search: None,
            arcana: Some("major".to_string()),
            page: None,
        };
        let data = load_cards_page(&repo, &viewer(), 1, query).expect("should load cards");

        assert_eq!(data.cards.items.len(), 1);
        assert_eq!(data.cards.items[0].name, "The Sun");
        assert_eq!(data.arcana, "major");
    }

    #[test]
    fn add_card_requires_admin_role() {
        let mut repo = MockRepository::new();
        repo.expect_create_cards().times(0);

        let form = AddCardForm {
            deck_id: 1,
            name: "The Fool".to_string(),
            arcana: "major".to_string(),
            suit: None,
            keywords: String::new(),
            upright_meaning: "Beginnings".to_string(),
            reversed_meaning: "Folly".to_string(),
        };
        let result = add_card(&repo, &viewer(), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
