//! Route definitions for campaign creator suggestions (PRD-24).

use axum::routing::get;
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET    /{campaign_id}/suggested-creators   -> suggested_creators
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{campaign_id}/suggested-creators",
        get(campaign::suggested_creators),
    )
}
