//! User entity model with the denormalized booster score snapshot.

use promohub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// The `booster_*` fields are a cache of the last recalculation, not the
/// source of truth; the `user_boosters` rows are. The snapshot is rewritten
/// synchronously after every completion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
    /// `"brand"` or `"creator"`.
    pub role: String,
    pub booster_score: i32,
    pub booster_percent: i32,
    pub booster_level: String,
    pub booster_updated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
