//! Campaign/creator matching scorer (PRD-24).
//!
//! Scores how well a creator fits a campaign's requirements: hard follower
//! filters, case-insensitive overlap on categories/languages/locations,
//! and a capped follower bonus. Candidates are loaded by the repository
//! layer; everything here operates on plain in-memory data.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Score weights
// ---------------------------------------------------------------------------

/// Points per matching category. Category fit is weighted highest.
pub const WEIGHT_CATEGORY: i64 = 4;

/// Points per matching language.
pub const WEIGHT_LANGUAGE: i64 = 2;

/// Points per matching location string.
pub const WEIGHT_LOCATION: i64 = 2;

/// One bonus point per this many followers.
pub const FOLLOWER_BONUS_STEP: i64 = 10_000;

/// Cap on the follower bonus so very large accounts don't dominate.
pub const MAX_FOLLOWER_BONUS: i64 = 10;

// ---------------------------------------------------------------------------
// Result limits
// ---------------------------------------------------------------------------

/// Maximum number of suggested creators returned per campaign.
pub const MAX_SUGGESTED_CREATORS: usize = 30;

/// Maximum number of candidate rows fetched for in-memory scoring.
pub const CANDIDATE_FETCH_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Campaign requirements relevant to scoring.
///
/// Empty lists and `None` bounds mean "no constraint": they never exclude
/// a candidate, they just contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct MatchRequirements {
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub locations: Vec<String>,
    pub min_followers: Option<i64>,
    pub max_followers: Option<i64>,
}

/// A candidate creator's scoring inputs, pre-resolved by the caller.
#[derive(Debug, Clone, Default)]
pub struct MatchCandidate {
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    /// City + district + state name, deduplicated, blanks dropped.
    pub locations: Vec<String>,
    /// Max parsed follower count across the creator's social accounts.
    pub followers: i64,
}

// ---------------------------------------------------------------------------
// Input resolution helpers
// ---------------------------------------------------------------------------

/// Parse a raw follower string as entered on a social account.
///
/// Strips thousands-separator commas and surrounding whitespace. Anything
/// that still fails to parse (or parses negative) contributes 0.
///
/// # Examples
///
/// ```
/// use promohub_core::matching::parse_followers;
/// assert_eq!(parse_followers("1,234,567"), 1_234_567);
/// assert_eq!(parse_followers(" 9800 "), 9800);
/// assert_eq!(parse_followers("n/a"), 0);
/// ```
pub fn parse_followers(raw: &str) -> i64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<i64>().unwrap_or(0).max(0)
}

/// Resolve a creator's follower count from their social accounts.
///
/// The max across accounts, not the sum; 0 with no accounts.
pub fn follower_count(raw_counts: &[String]) -> i64 {
    raw_counts
        .iter()
        .map(|raw| parse_followers(raw))
        .max()
        .unwrap_or(0)
}

/// Assemble a creator's location strings for overlap matching.
///
/// City, district, and state name in that order, trimmed, blanks dropped,
/// deduplicated case-insensitively (first spelling wins).
pub fn location_strings(
    city: Option<&str>,
    district: Option<&str>,
    state_name: Option<&str>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for part in [city, district, state_name].into_iter().flatten() {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Case-insensitive set-intersection size between two string lists.
///
/// Both sides are lowered into sets first, so duplicate entries never
/// inflate the count.
pub fn overlap(required: &[String], candidate: &[String]) -> i64 {
    if required.is_empty() || candidate.is_empty() {
        return 0;
    }
    let required: HashSet<String> = required
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    candidate
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<HashSet<_>>()
        .intersection(&required)
        .count() as i64
}

/// Capped follower bonus: one point per [`FOLLOWER_BONUS_STEP`] followers,
/// at most [`MAX_FOLLOWER_BONUS`].
pub fn follower_bonus(followers: i64) -> i64 {
    (followers.max(0) / FOLLOWER_BONUS_STEP).min(MAX_FOLLOWER_BONUS)
}

/// Score a candidate against a campaign's requirements.
///
/// `None` is a hard exclusion (follower count outside the required range);
/// any `Some` score is non-negative.
pub fn score_candidate(requirements: &MatchRequirements, candidate: &MatchCandidate) -> Option<i64> {
    if let Some(min) = requirements.min_followers {
        if candidate.followers < min {
            return None;
        }
    }
    if let Some(max) = requirements.max_followers {
        if candidate.followers > max {
            return None;
        }
    }

    let category_hits = overlap(&requirements.categories, &candidate.categories);
    let language_hits = overlap(&requirements.languages, &candidate.languages);
    let location_hits = overlap(&requirements.locations, &candidate.locations);

    Some(
        category_hits * WEIGHT_CATEGORY
            + language_hits * WEIGHT_LANGUAGE
            + location_hits * WEIGHT_LOCATION
            + follower_bonus(candidate.followers),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // -- parse_followers ------------------------------------------------------

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_followers("9800"), 9800);
    }

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_followers("1,234,567"), 1_234_567);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_followers("  42,000 "), 42_000);
    }

    #[test]
    fn non_numeric_contributes_zero() {
        assert_eq!(parse_followers("n/a"), 0);
        assert_eq!(parse_followers(""), 0);
        assert_eq!(parse_followers("12.5k"), 0);
    }

    #[test]
    fn negative_clamped_to_zero() {
        assert_eq!(parse_followers("-5"), 0);
    }

    // -- follower_count -------------------------------------------------------

    #[test]
    fn follower_count_takes_max_not_sum() {
        let raw = strings(&["5,000", "95,000", "garbage"]);
        assert_eq!(follower_count(&raw), 95_000);
    }

    #[test]
    fn follower_count_defaults_to_zero() {
        assert_eq!(follower_count(&[]), 0);
    }

    // -- location_strings -----------------------------------------------------

    #[test]
    fn locations_drop_blanks_and_dupes() {
        let locations = location_strings(Some("Pune"), Some(" "), Some("pune"));
        assert_eq!(locations, vec!["Pune"]);
    }

    #[test]
    fn locations_preserve_order() {
        let locations = location_strings(Some("Mumbai"), Some("Thane"), Some("Maharashtra"));
        assert_eq!(locations, vec!["Mumbai", "Thane", "Maharashtra"]);
    }

    #[test]
    fn locations_all_absent() {
        assert!(location_strings(None, None, None).is_empty());
    }

    // -- overlap --------------------------------------------------------------

    #[test]
    fn overlap_is_case_insensitive() {
        assert_eq!(
            overlap(&strings(&["Fashion", "Tech"]), &strings(&["fashion", "food"])),
            1
        );
    }

    #[test]
    fn overlap_ignores_duplicates() {
        assert_eq!(
            overlap(
                &strings(&["fashion", "Fashion"]),
                &strings(&["fashion", "FASHION"])
            ),
            1
        );
    }

    #[test]
    fn empty_required_list_contributes_nothing() {
        assert_eq!(overlap(&[], &strings(&["fashion"])), 0);
    }

    // -- follower_bonus -------------------------------------------------------

    #[test]
    fn bonus_floors_per_step() {
        assert_eq!(follower_bonus(0), 0);
        assert_eq!(follower_bonus(9_999), 0);
        assert_eq!(follower_bonus(10_000), 1);
        assert_eq!(follower_bonus(95_000), 9);
    }

    #[test]
    fn bonus_caps_at_ten() {
        assert_eq!(follower_bonus(100_000), 10);
        assert_eq!(follower_bonus(25_000_000), 10);
    }

    // -- score_candidate ------------------------------------------------------

    fn requirements() -> MatchRequirements {
        MatchRequirements {
            categories: strings(&["Fashion", "Lifestyle"]),
            languages: strings(&["Hindi", "English"]),
            locations: strings(&["Mumbai"]),
            min_followers: None,
            max_followers: None,
        }
    }

    #[test]
    fn full_match_scores_all_terms() {
        let candidate = MatchCandidate {
            categories: strings(&["fashion", "lifestyle"]),
            languages: strings(&["hindi", "english"]),
            locations: strings(&["mumbai", "maharashtra"]),
            followers: 25_000,
        };
        // 2*4 + 2*2 + 1*2 + 2 = 16
        assert_eq!(score_candidate(&requirements(), &candidate), Some(16));
    }

    #[test]
    fn below_min_followers_is_excluded() {
        let mut req = requirements();
        req.min_followers = Some(10_000);
        let candidate = MatchCandidate {
            followers: 5_000,
            ..Default::default()
        };
        assert_eq!(score_candidate(&req, &candidate), None);
    }

    #[test]
    fn above_max_followers_is_excluded() {
        let mut req = requirements();
        req.max_followers = Some(50_000);
        let candidate = MatchCandidate {
            followers: 60_000,
            ..Default::default()
        };
        assert_eq!(score_candidate(&req, &candidate), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut req = requirements();
        req.min_followers = Some(10_000);
        req.max_followers = Some(10_000);
        let candidate = MatchCandidate {
            followers: 10_000,
            ..Default::default()
        };
        assert_eq!(score_candidate(&req, &candidate), Some(1));
    }

    #[test]
    fn empty_requirements_never_exclude() {
        let candidate = MatchCandidate {
            followers: 0,
            ..Default::default()
        };
        assert_eq!(score_candidate(&MatchRequirements::default(), &candidate), Some(0));
    }

    #[test]
    fn follower_bonus_orders_otherwise_equal_candidates() {
        let req = requirements();
        let small = MatchCandidate {
            categories: strings(&["fashion"]),
            languages: strings(&["hindi"]),
            locations: strings(&["mumbai"]),
            followers: 5_000,
        };
        let large = MatchCandidate {
            followers: 95_000,
            ..small.clone()
        };
        let small_score = score_candidate(&req, &small).unwrap();
        let large_score = score_candidate(&req, &large).unwrap();
        assert_eq!(large_score - small_score, 9);
    }

    #[test]
    fn score_is_never_negative() {
        let candidate = MatchCandidate::default();
        let score = score_candidate(&requirements(), &candidate).unwrap();
        assert!(score >= 0);
    }
}
