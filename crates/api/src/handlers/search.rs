//! Handler for public creator search (PRD-26).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use promohub_core::ranking;
use promohub_db::models::creator::{CreatorSearchParams, CreatorSearchRow};
use promohub_db::repositories::CreatorRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// A search result row decorated with the ranking badge.
#[derive(Debug, Serialize)]
pub struct CreatorSearchResult {
    #[serde(flatten)]
    pub creator: CreatorSearchRow,
    pub badge: &'static str,
    pub rank_reason: &'static str,
}

/// GET /api/v1/search/creators
///
/// Public creator search ordered by the stored booster percent. Each row
/// carries a badge and rank reason derived from that percent.
pub async fn search_creators(
    State(state): State<AppState>,
    Query(params): Query<CreatorSearchParams>,
) -> AppResult<impl IntoResponse> {
    let rows = CreatorRepo::search(&state.pool, &params).await?;

    let results: Vec<CreatorSearchResult> = rows
        .into_iter()
        .map(|row| {
            let badge = ranking::badge(row.booster_percent);
            CreatorSearchResult {
                creator: row,
                badge: badge.badge,
                rank_reason: badge.rank_reason,
            }
        })
        .collect();

    tracing::debug!(
        query = ?params.q,
        results = results.len(),
        "Creator search executed",
    );

    Ok(Json(DataResponse { data: results }))
}
