//! Repository for creator candidate fetches and public search (PRD-24, PRD-26).

use sqlx::PgPool;

use crate::models::creator::{CreatorCandidateRow, CreatorSearchParams, CreatorSearchRow};

/// Default number of public search results.
const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of public search results per request.
const MAX_SEARCH_LIMIT: i64 = 100;

/// Provides read access to creator profiles for scoring and search.
pub struct CreatorRepo;

impl CreatorRepo {
    /// Fetch a bounded candidate set for in-memory campaign matching.
    ///
    /// One row per creator with a profile, with the raw follower strings of
    /// all their social accounts aggregated. Ordered by username so the
    /// stable sort downstream yields a deterministic ranking.
    pub async fn list_candidates(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<CreatorCandidateRow>, sqlx::Error> {
        sqlx::query_as::<_, CreatorCandidateRow>(
            "SELECT u.id AS user_id, u.name, u.username, u.image, \
                    cp.city, cp.district, cp.state_name, cp.categories, cp.languages, \
                    COALESCE(ARRAY_AGG(sa.followers) FILTER (WHERE sa.followers IS NOT NULL), '{}') \
                        AS follower_counts \
             FROM users u \
             JOIN creator_profiles cp ON cp.user_id = u.id \
             LEFT JOIN social_accounts sa ON sa.user_id = u.id \
             WHERE u.role = 'creator' \
             GROUP BY u.id, cp.id \
             ORDER BY u.username \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Public creator search, ordered by the stored booster percent (the
    /// search ranking signal), then username.
    ///
    /// All filters are optional; `limit` is clamped to [1, 100].
    pub async fn search(
        pool: &PgPool,
        params: &CreatorSearchParams,
    ) -> Result<Vec<CreatorSearchRow>, sqlx::Error> {
        let limit = params
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);

        sqlx::query_as::<_, CreatorSearchRow>(
            "SELECT u.id, u.name, u.username, u.image, cp.city, cp.categories, \
                    u.booster_percent, u.booster_level \
             FROM users u \
             JOIN creator_profiles cp ON cp.user_id = u.id \
             WHERE u.role = 'creator' \
               AND ($1::text IS NULL \
                    OR u.name ILIKE '%' || $1 || '%' \
                    OR u.username ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL \
                    OR EXISTS (SELECT 1 FROM UNNEST(cp.categories) c WHERE c ILIKE $2)) \
               AND ($3::text IS NULL OR cp.city ILIKE $3) \
             ORDER BY u.booster_percent DESC, u.username \
             LIMIT $4",
        )
        .bind(params.q.as_deref())
        .bind(params.category.as_deref())
        .bind(params.city.as_deref())
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
