/**
 * User Search Handler
 *
 * GET /bulk?filter=
 *
 * Unauthenticated fuzzy search: returns every user whose first or last
 * name contains the filter as a case-sensitive substring. An absent or
 * empty filter returns all users. Results are projected to public
 * fields only.
 */

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::handlers::types::SearchResponse;
use crate::auth::users::search_users;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Name substring to match; absent means "all users"
    #[serde(default)]
    pub filter: Option<String>,
}

/// Search users by name substring
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = params.filter.unwrap_or_default();

    let users = search_users(&state.pool, &filter).await?;

    tracing::debug!("search returned {} users", users.len());

    Ok(Json(SearchResponse { user: users }))
}
