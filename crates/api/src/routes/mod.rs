pub mod booster;
pub mod campaign;
pub mod health;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /creators/{user_id}/boosters                     summary (ensure + recalc)
/// /creators/{user_id}/boosters/complete            complete a booster (POST)
///
/// /campaigns/{campaign_id}/suggested-creators      ranked creator suggestions
///
/// /search/creators                                 public creator search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/creators", booster::router())
        .nest("/campaigns", campaign::router())
        .nest("/search", search::router())
}
