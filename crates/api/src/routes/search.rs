//! Route definitions for public creator search (PRD-26).

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/search`.
///
/// ```text
/// GET    /creators   -> search_creators
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/creators", get(search::search_creators))
}
