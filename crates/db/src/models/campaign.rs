//! Campaign and campaign requirement models (PRD-24).

use promohub_core::matching::MatchRequirements;
use promohub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub brand_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// `"draft"`, `"active"` or `"closed"`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `campaign_requirements` table (1:1 with a campaign).
///
/// Scorer input only; absent fields mean "no constraint". `min_engagement`
/// and `gender` are stored for campaign display but are not part of the
/// matching score.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignRequirements {
    pub id: DbId,
    pub campaign_id: DbId,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub locations: Vec<String>,
    pub min_followers: Option<i64>,
    pub max_followers: Option<i64>,
    pub min_engagement: Option<f64>,
    pub gender: Option<String>,
    pub created_at: Timestamp,
}

impl CampaignRequirements {
    /// Project the row down to the scorer's input.
    pub fn to_match_requirements(&self) -> MatchRequirements {
        MatchRequirements {
            categories: self.categories.clone(),
            languages: self.languages.clone(),
            locations: self.locations.clone(),
            min_followers: self.min_followers,
            max_followers: self.max_followers,
        }
    }
}
