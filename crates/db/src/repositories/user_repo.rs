//! Repository for the `users` table.

use promohub_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, name, username, email, image, role, booster_score, booster_percent, \
                       booster_level, booster_updated_at, created_at, updated_at";

/// Provides data access for users and their score snapshot.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a freshly recalculated score snapshot onto the user row.
    ///
    /// The snapshot is a cache of the last recalculation; callers rewrite
    /// it wholesale rather than patching individual fields.
    pub async fn update_booster_snapshot(
        pool: &PgPool,
        user_id: DbId,
        booster_score: i32,
        booster_percent: i32,
        booster_level: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 booster_score = $2, \
                 booster_percent = $3, \
                 booster_level = $4, \
                 booster_updated_at = NOW(), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(booster_score)
            .bind(booster_percent)
            .bind(booster_level)
            .fetch_one(pool)
            .await
    }
}
