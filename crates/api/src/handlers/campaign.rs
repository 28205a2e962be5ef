//! Handler for campaign creator suggestions (PRD-24).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use promohub_core::error::CoreError;
use promohub_core::matching::{self, CANDIDATE_FETCH_LIMIT, MAX_SUGGESTED_CREATORS};
use promohub_core::types::DbId;
use promohub_db::models::creator::SuggestedCreator;
use promohub_db::repositories::{CampaignRepo, CreatorRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/campaigns/{campaign_id}/suggested-creators
///
/// Scores a bounded candidate set against the campaign's requirements and
/// returns the top suggestions, best fit first. Candidates outside the
/// required follower range are excluded entirely. A campaign without a
/// requirements row matches every candidate (score from the follower bonus
/// only).
pub async fn suggested_creators(
    State(state): State<AppState>,
    Path(campaign_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignRepo::find_by_id(&state.pool, campaign_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id: campaign_id,
        })?;

    let requirements = CampaignRepo::find_requirements(&state.pool, campaign.id)
        .await?
        .map(|r| r.to_match_requirements())
        .unwrap_or_default();

    let candidates = CreatorRepo::list_candidates(&state.pool, CANDIDATE_FETCH_LIMIT).await?;

    let mut suggestions: Vec<SuggestedCreator> = candidates
        .into_iter()
        .filter_map(|row| {
            let candidate = row.to_match_candidate();
            matching::score_candidate(&requirements, &candidate).map(|score| SuggestedCreator {
                id: row.user_id,
                name: row.name,
                username: row.username,
                image: row.image,
                city: row.city,
                followers: candidate.followers,
                categories: row.categories,
                languages: row.languages,
                score,
            })
        })
        .collect();

    // Stable sort: ties keep the repository's username order.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTED_CREATORS);

    tracing::debug!(
        campaign_id,
        suggestions = suggestions.len(),
        "Suggested creators computed",
    );

    Ok(Json(DataResponse { data: suggestions }))
}
