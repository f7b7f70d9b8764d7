use crate::SERVICE_ACCESS_ROLE;
use crate::domain::reading::Reading;
use crate::dto::api::ReadingsQuery;
use crate::listing::{self, ALL_CATEGORIES, QueryState};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::ReadingReader;
use crate::routes::ensure_role;
use crate::services::ServiceResult;

/// Returns one page of the authenticated user's readings, driven by the
/// same listing pipeline as the HTML index.
pub fn list_readings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ReadingsQuery,
) -> ServiceResult<Paginated<Reading>>
where
    R: ReadingReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let readings = repo.list_readings(&user.email).map_err(|err| {
        log::error!("Failed to list readings: {err}");
        err
    })?;

    let state = QueryState::new()
        .with_search_term(params.search.unwrap_or_default())
        .with_category(
            params
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        )
        .with_page(params.page.unwrap_or(1));

    Ok(listing::select(readings, &state, DEFAULT_ITEMS_PER_PAGE))
}
