//! Repository for the `campaigns` and `campaign_requirements` tables (PRD-24).

use promohub_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CampaignRequirements};

/// Column list for `campaigns` queries.
const CAMPAIGN_COLUMNS: &str = "id, brand_id, title, description, status, created_at, updated_at";

/// Column list for `campaign_requirements` queries.
const REQUIREMENT_COLUMNS: &str = "id, campaign_id, categories, languages, locations, \
                                   min_followers, max_followers, min_engagement, gender, created_at";

/// Provides data access for campaigns and their requirements.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Find a campaign by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the requirements attached to a campaign, if any.
    pub async fn find_requirements(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Option<CampaignRequirements>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUIREMENT_COLUMNS} FROM campaign_requirements WHERE campaign_id = $1"
        );
        sqlx::query_as::<_, CampaignRequirements>(&query)
            .bind(campaign_id)
            .fetch_optional(pool)
            .await
    }
}
