//! Creator profile projections for matching and public search (PRD-24, PRD-26).

use promohub_core::matching::{self, MatchCandidate};
use promohub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Candidate projection for campaign matching: one creator's profile with
/// raw follower strings aggregated across their social accounts.
#[derive(Debug, Clone, FromRow)]
pub struct CreatorCandidateRow {
    pub user_id: DbId,
    pub name: String,
    pub username: String,
    pub image: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state_name: Option<String>,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    /// Raw `followers` strings as entered, one per social account.
    pub follower_counts: Vec<String>,
}

impl CreatorCandidateRow {
    /// Resolve the scorer input: location strings and max follower count.
    pub fn to_match_candidate(&self) -> MatchCandidate {
        MatchCandidate {
            categories: self.categories.clone(),
            languages: self.languages.clone(),
            locations: matching::location_strings(
                self.city.as_deref(),
                self.district.as_deref(),
                self.state_name.as_deref(),
            ),
            followers: matching::follower_count(&self.follower_counts),
        }
    }
}

/// Ranked suggestion returned by the suggested-creators endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedCreator {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub image: Option<String>,
    pub city: Option<String>,
    pub followers: i64,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub score: i64,
}

/// Query parameters for public creator search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatorSearchParams {
    /// Free-text match against name and username.
    pub q: Option<String>,
    /// Case-insensitive category filter.
    pub category: Option<String>,
    /// Case-insensitive city filter.
    pub city: Option<String>,
    pub limit: Option<i64>,
}

/// A public search result row, ordered by the stored booster percent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreatorSearchRow {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub image: Option<String>,
    pub city: Option<String>,
    pub categories: Vec<String>,
    pub booster_percent: i32,
    pub booster_level: String,
}
