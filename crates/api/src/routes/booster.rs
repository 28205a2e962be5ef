//! Route definitions for booster summary and completion (PRD-18).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::booster;
use crate::state::AppState;

/// Routes mounted at `/creators`.
///
/// ```text
/// GET    /{user_id}/boosters            -> get_summary
/// POST   /{user_id}/boosters/complete   -> complete_booster
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/boosters", get(booster::get_summary))
        .route(
            "/{user_id}/boosters/complete",
            post(booster::complete_booster),
        )
}
