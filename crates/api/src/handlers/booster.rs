//! Handlers for the booster summary and completion operations (PRD-18).
//!
//! The user's snapshot fields are a cache, not source of truth; both
//! endpoints recompute the summary from the `user_boosters` rows and
//! rewrite the snapshot before responding, so it is never stale by more
//! than one request.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use promohub_core::booster::{self, BoosterItem, BoosterSummary, STATUS_COMPLETED};
use promohub_core::error::CoreError;
use promohub_core::types::DbId;
use promohub_db::models::booster::{UserBooster, UserBoosterDetail};
use promohub_db::repositories::{BoosterRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// DTO for completing a booster.
#[derive(Debug, Deserialize)]
pub struct CompleteBoosterRequest {
    pub booster_key: String,
    /// Opaque payload: links, notes, manual-entry text.
    pub meta: Option<serde_json::Value>,
}

/// Summary plus the full per-booster list, returned by the summary fetch.
#[derive(Debug, Serialize)]
pub struct BoosterOverview {
    pub summary: BoosterSummary,
    pub boosters: Vec<UserBoosterDetail>,
}

/// Completion response: the (possibly unchanged) state row plus the
/// recomputed summary.
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub state: UserBooster,
    pub summary: BoosterSummary,
}

// ---------------------------------------------------------------------------
// Shared recalculation helper
// ---------------------------------------------------------------------------

/// Recompute a user's score from their active booster state and persist the
/// snapshot onto the user row.
///
/// One read, one pure computation, one write; idempotent. Deliberately not
/// in a transaction with the completion upsert: completion is monotonic, so
/// racing calls at worst recompute twice with the same eventual result.
async fn recalculate(
    pool: &sqlx::PgPool,
    user_id: DbId,
) -> Result<(BoosterSummary, Vec<UserBoosterDetail>), sqlx::Error> {
    let boosters = BoosterRepo::list_user_boosters(pool, user_id).await?;

    let items: Vec<BoosterItem> = boosters
        .iter()
        .map(|b| BoosterItem {
            key: b.key.clone(),
            category: b.category.clone(),
            points: b.points,
            completed: b.status == STATUS_COMPLETED,
        })
        .collect();
    let summary = booster::compute_summary(&items);

    UserRepo::update_booster_snapshot(
        pool,
        user_id,
        summary.booster_score,
        summary.booster_percent,
        &summary.booster_level,
    )
    .await?;

    Ok((summary, boosters))
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/creators/{user_id}/boosters
///
/// Materializes missing state rows (idempotent), recalculates, and returns
/// the summary plus the full per-booster list in display order.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    BoosterRepo::ensure_user_states(&state.pool, user.id).await?;
    let (summary, boosters) = recalculate(&state.pool, user.id).await?;

    Ok(Json(DataResponse {
        data: BoosterOverview { summary, boosters },
    }))
}

/// POST /api/v1/creators/{user_id}/boosters/complete
///
/// Marks a booster completed. Monotonic: re-completing is a no-op on the
/// state row (original `completed_at` and meta are kept), but the summary
/// is still recomputed and persisted.
pub async fn complete_booster(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<CompleteBoosterRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    let definition = BoosterRepo::find_definition_by_key(&state.pool, &input.booster_key)
        .await?
        .ok_or_else(|| CoreError::InvalidKey {
            key: input.booster_key.clone(),
        })?;

    let state_row =
        BoosterRepo::complete(&state.pool, user.id, definition.id, input.meta.as_ref()).await?;
    let (summary, _) = recalculate(&state.pool, user.id).await?;

    tracing::info!(
        user_id = user.id,
        booster_key = %definition.key,
        percent = summary.booster_percent,
        level = %summary.booster_level,
        "Booster completed",
    );

    Ok(Json(DataResponse {
        data: CompletionResponse {
            state: state_row,
            summary,
        },
    }))
}
