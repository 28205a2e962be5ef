//! Booster catalog and per-user state models (PRD-18).

use promohub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `booster_definitions` table.
///
/// Catalog entries are seeded by migration and never deleted, only
/// deactivated, so historical scores stay explainable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoosterDefinition {
    pub id: DbId,
    pub key: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: i32,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// A row from the `user_boosters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBooster {
    pub id: DbId,
    pub user_id: DbId,
    pub booster_id: DbId,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub meta: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An active catalog entry joined with one user's completion state.
///
/// `status` falls back to `available` when the state row has not been
/// materialized yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBoosterDetail {
    pub key: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: i32,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub meta: Option<serde_json::Value>,
}
