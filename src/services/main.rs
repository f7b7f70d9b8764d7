use crate::SERVICE_ACCESS_ROLE;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::listing::{self, ALL_CATEGORIES, QueryState};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::ReadingReader;
use crate::routes::ensure_role;
use crate::services::ServiceResult;

/// Loads the signed-in user's readings for the index page.
///
/// The full journal is fetched once, then searched, filtered, and paginated
/// in memory by the listing pipeline.
pub fn load_index_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: IndexQuery,
) -> ServiceResult<IndexPageData>
where
    R: ReadingReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let readings = repo.list_readings(&user.email).map_err(|err| {
        log::error!("Failed to list readings: {err}");
        err
    })?;

    let mut categories: Vec<String> = readings.iter().map(|r| r.category.clone()).collect();
    categories.sort();
    categories.dedup();

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let category = query
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let state = QueryState::new()
        .with_search_term(search_query.clone().unwrap_or_default())
        .with_category(category.clone())
        .with_page(query.page.unwrap_or(1));

    let readings = listing::select(readings, &state, DEFAULT_ITEMS_PER_PAGE);

    Ok(IndexPageData {
        readings,
        categories,
        search_query,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::Reading;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "seeker@example.com".to_string(),
            name: "Seeker".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
        }
    }

    fn reading(id: i32, title: &str, category: &str) -> Reading {
        Reading {
            id,
            user_email: "seeker@example.com".to_string(),
            title: title.to_string(),
            content: "content".to_string(),
            interpretation: None,
            category: category.to_string(),
            image: None,
            cards: Vec::new(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn index_requires_access_role() {
        let mut repo = MockRepository::new();
        repo.expect_list_readings().times(0);

        let result = load_index_page(&repo, &user(&[]), IndexQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn index_lists_own_readings_with_categories() {
        let mut repo = MockRepository::new();
        repo.expect_list_readings()
            .withf(|email| email == "seeker@example.com")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    reading(1, "Morning draw", "General"),
                    reading(2, "Interview spread", "Career"),
                    reading(3, "Evening draw", "General"),
                ])
            });

        let data = load_index_page(&repo, &user(&["tarot"]), IndexQuery::default())
            .expect("should load index");

        assert_eq!(data.readings.items.len(), 3);
        assert_eq!(data.categories, vec!["Career", "General"]);
        assert_eq!(data.category, ALL_CATEGORIES);
        assert_eq!(data.search_query, None);
    }

    #[test]
    fn search_narrows_the_list() {
        let mut repo = MockRepository::new();
        repo.expect_list_readings().times(1).returning(|_| {
            Ok(vec![
                reading(1, "Golden Star", "General"),
                reading(2, "Silver Moon", "General"),
            ])
        });

        let query = IndexQuery {
            search: Some("gold".to_string()),
            ..Default::default()
        };
        let data =
            load_index_page(&repo, &user(&["tarot"]), query).expect("should load index");

        assert_eq!(data.readings.items.len(), 1);
        assert_eq!(data.readings.items[0].title, "Golden Star");
        assert_eq!(data.search_query.as_deref(), Some("gold"));
    }

    #[test]
    fn category_filter_with_stale_page_lands_on_first_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_readings().times(1).returning(|_| {
            Ok((0..12)
                .map(|id| reading(id, "Draw", "Love / Relationships"))
                .chain((12..13).map(|id| reading(id, "Draw", "Career")))
                .collect())
        });

        // A category switch submitted from page 3 of the old list.
        let query = IndexQuery {
            search: None,
            category: Some("Career".to_string()),
            page: Some(3),
        };
        let data =
            load_index_page(&repo, &user(&["tarot"]), query).expect("should load index");

        // One matching reading, so the out-of-range page clamps to 1.
        assert_eq!(data.readings.page, 1);
        assert_eq!(data.readings.items.len(), 1);
    }
}
