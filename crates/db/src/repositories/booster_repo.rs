//! Repository for the `booster_definitions` and `user_boosters` tables (PRD-18).

use promohub_core::types::DbId;
use sqlx::PgPool;

use crate::models::booster::{BoosterDefinition, UserBooster, UserBoosterDetail};

/// Column list for `booster_definitions` queries.
const DEF_COLUMNS: &str =
    "id, key, title, description, category, points, sort_order, is_active, created_at";

/// Column list for `user_boosters` queries.
const STATE_COLUMNS: &str =
    "id, user_id, booster_id, status, completed_at, meta, created_at, updated_at";

/// Provides data access for the booster catalog and per-user state.
pub struct BoosterRepo;

impl BoosterRepo {
    /// List active catalog entries in display order.
    pub async fn list_active_definitions(
        pool: &PgPool,
    ) -> Result<Vec<BoosterDefinition>, sqlx::Error> {
        let query = format!(
            "SELECT {DEF_COLUMNS} FROM booster_definitions \
             WHERE is_active \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, BoosterDefinition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a catalog entry by its key, active or not.
    pub async fn find_definition_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<BoosterDefinition>, sqlx::Error> {
        let query = format!("SELECT {DEF_COLUMNS} FROM booster_definitions WHERE key = $1");
        sqlx::query_as::<_, BoosterDefinition>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Materialize one `available` state row per active catalog entry for a
    /// user. Idempotent: existing rows (any status) are left untouched.
    ///
    /// Returns the number of rows created.
    pub async fn ensure_user_states(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_boosters (user_id, booster_id) \
             SELECT $1, d.id FROM booster_definitions d WHERE d.is_active \
             ON CONFLICT (user_id, booster_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        let created = result.rows_affected();
        if created > 0 {
            tracing::debug!(user_id, created, "Materialized booster state rows");
        }
        Ok(created)
    }

    /// List a user's boosters: every active catalog entry joined with the
    /// user's state, defaulting to `available` where no row exists yet.
    pub async fn list_user_boosters(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserBoosterDetail>, sqlx::Error> {
        sqlx::query_as::<_, UserBoosterDetail>(
            "SELECT d.key, d.title, d.description, d.category, d.points, \
                    COALESCE(ub.status, 'available') AS status, \
                    ub.completed_at, ub.meta \
             FROM booster_definitions d \
             LEFT JOIN user_boosters ub \
                    ON ub.booster_id = d.id AND ub.user_id = $1 \
             WHERE d.is_active \
             ORDER BY d.sort_order, d.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Mark a booster completed for a user.
    ///
    /// Monotonic upsert: a row that is already `completed` keeps its
    /// original `completed_at`, `meta`, and `updated_at` (the call is a
    /// no-op on the state). A fresh or `available` row is completed with
    /// `completed_at = NOW()` and the provided meta, if any.
    pub async fn complete(
        pool: &PgPool,
        user_id: DbId,
        booster_id: DbId,
        meta: Option<&serde_json::Value>,
    ) -> Result<UserBooster, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_boosters (user_id, booster_id, status, completed_at, meta) \
             VALUES ($1, $2, 'completed', NOW(), $3) \
             ON CONFLICT (user_id, booster_id) DO UPDATE SET \
                 status = 'completed', \
                 completed_at = CASE \
                     WHEN user_boosters.status = 'completed' THEN user_boosters.completed_at \
                     ELSE NOW() \
                 END, \
                 meta = CASE \
                     WHEN user_boosters.status = 'completed' THEN user_boosters.meta \
                     ELSE COALESCE(EXCLUDED.meta, user_boosters.meta) \
                 END, \
                 updated_at = CASE \
                     WHEN user_boosters.status = 'completed' THEN user_boosters.updated_at \
                     ELSE NOW() \
                 END \
             RETURNING {STATE_COLUMNS}"
        );
        sqlx::query_as::<_, UserBooster>(&query)
            .bind(user_id)
            .bind(booster_id)
            .bind(meta)
            .fetch_one(pool)
            .await
    }
}
