//! DTOs exposed by the JSON API endpoints.

use serde::Deserialize;

/// Query parameters accepted by the `/api/v1/readings` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReadingsQuery {
    /// Optional free-form search string applied to the reading list.
    pub search: Option<String>,
    /// Optional category filter; absent means all categories.
    pub category: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<usize>,
}
