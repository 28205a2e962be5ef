//! Booster catalog constants and score recalculation (PRD-18).
//!
//! A booster is a discrete profile-completion action (verify an email,
//! add a portfolio link) worth a fixed number of points. This module holds
//! the category/status/tier constants and the pure recalculation engine
//! that turns a user's completion state into a weighted percentage, a tier
//! label, and a raw point score. The `core` crate contains no database
//! dependencies; evaluation is done against pre-loaded rows passed in by
//! the caller.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

/// Valid booster categories.
pub const CATEGORY_VERIFICATION: &str = "Verification";
pub const CATEGORY_PROFILE_POWER: &str = "Profile Power";
pub const CATEGORY_AUDIENCE: &str = "Audience";
pub const CATEGORY_TRUST: &str = "Trust";
pub const CATEGORY_PERFORMANCE: &str = "Performance";

/// All valid booster categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_VERIFICATION,
    CATEGORY_PROFILE_POWER,
    CATEGORY_AUDIENCE,
    CATEGORY_TRUST,
    CATEGORY_PERFORMANCE,
];

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Valid per-user booster statuses (stored in `user_boosters.status`).
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid booster status strings.
pub const VALID_BOOSTER_STATUSES: &[&str] = &[STATUS_AVAILABLE, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Tier thresholds
// ---------------------------------------------------------------------------

/// Tier labels derived from the weighted percent.
pub const LEVEL_ELITE: &str = "Elite Boost";
pub const LEVEL_HIGH: &str = "High Boost";
pub const LEVEL_MEDIUM: &str = "Medium Boost";
pub const LEVEL_STARTER: &str = "Starter Boost";

/// Inclusive lower bounds for each tier, evaluated in descending order so
/// ties resolve to the higher bracket.
pub const ELITE_MIN_PERCENT: i32 = 90;
pub const HIGH_MIN_PERCENT: i32 = 70;
pub const MEDIUM_MIN_PERCENT: i32 = 40;

// ---------------------------------------------------------------------------
// Portfolio cap
// ---------------------------------------------------------------------------

/// Catalog key of the portfolio booster.
pub const PORTFOLIO_KEY: &str = "portfolio";

/// Ceiling applied to the weighted percent while the portfolio booster is
/// incomplete. Product rule: no creator reaches Elite without a portfolio.
/// Deliberately pinned to the single `portfolio` key; there is no general
/// "required boosters" mechanism.
pub const PORTFOLIO_CAP_PERCENT: i32 = 85;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Per-user completion status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoosterStatus {
    Available,
    Completed,
}

impl BoosterStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_AVAILABLE => Ok(Self::Available),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid booster status '{s}'. Must be one of: {}",
                VALID_BOOSTER_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => STATUS_AVAILABLE,
            Self::Completed => STATUS_COMPLETED,
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// One active catalog entry joined with the user's completion state.
///
/// Callers must pre-filter to active definitions: retired boosters are
/// excluded from both the numerator and the denominator, so deactivating
/// one never lowers an existing user's percent.
#[derive(Debug, Clone)]
pub struct BoosterItem {
    pub key: String,
    pub category: String,
    pub points: i32,
    pub completed: bool,
}

/// Computed score summary, persisted onto the user's snapshot fields and
/// returned by the booster endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoosterSummary {
    pub total_points: i32,
    pub earned_points: i32,
    /// Weighted completion percentage, 0-100.
    #[serde(rename = "percent")]
    pub booster_percent: i32,
    /// Tier label derived from the weighted percent.
    #[serde(rename = "boost_level")]
    pub booster_level: String,
    /// Raw earned points, doubled as the legacy score field.
    pub booster_score: i32,
}

// ---------------------------------------------------------------------------
// Scoring functions
// ---------------------------------------------------------------------------

/// Category weight multiplier for the weighted percent.
///
/// Unrecognized categories fall through to 1.0 so a future catalog category
/// scores neutrally instead of breaking recalculation.
pub fn category_weight(category: &str) -> f64 {
    match category {
        CATEGORY_VERIFICATION => 1.4,
        CATEGORY_PROFILE_POWER => 1.2,
        CATEGORY_PERFORMANCE => 1.1,
        CATEGORY_TRUST => 1.1,
        CATEGORY_AUDIENCE => 1.0,
        _ => 1.0,
    }
}

/// Tier label for a weighted percent. Inclusive lower bounds, evaluated in
/// descending order so ties resolve to the higher bracket.
pub fn boost_level(percent: i32) -> &'static str {
    if percent >= ELITE_MIN_PERCENT {
        LEVEL_ELITE
    } else if percent >= HIGH_MIN_PERCENT {
        LEVEL_HIGH
    } else if percent >= MEDIUM_MIN_PERCENT {
        LEVEL_MEDIUM
    } else {
        LEVEL_STARTER
    }
}

/// Recalculate the score summary from a user's active booster items.
///
/// Pure and deterministic: calling twice with unchanged inputs produces an
/// identical summary. The weighted percent is rounded to the nearest
/// integer; while the portfolio booster is incomplete (or absent) the
/// percent is clamped to [`PORTFOLIO_CAP_PERCENT`] before the tier label
/// is derived.
pub fn compute_summary(items: &[BoosterItem]) -> BoosterSummary {
    let mut total_points = 0i32;
    let mut earned_points = 0i32;
    let mut weighted_total = 0f64;
    let mut weighted_earned = 0f64;
    let mut portfolio_completed = false;

    for item in items {
        let weight = category_weight(&item.category);
        total_points += item.points;
        weighted_total += f64::from(item.points) * weight;
        if item.completed {
            earned_points += item.points;
            weighted_earned += f64::from(item.points) * weight;
            if item.key == PORTFOLIO_KEY {
                portfolio_completed = true;
            }
        }
    }

    let mut percent = if weighted_total > 0.0 {
        (weighted_earned / weighted_total * 100.0).round() as i32
    } else {
        0
    };

    if !portfolio_completed {
        percent = percent.min(PORTFOLIO_CAP_PERCENT);
    }

    BoosterSummary {
        total_points,
        earned_points,
        booster_percent: percent,
        booster_level: boost_level(percent).to_string(),
        booster_score: earned_points,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
