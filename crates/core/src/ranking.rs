//! Creator search ranking badges (PRD-26).
//!
//! Public creator search orders results by the stored booster percent and
//! decorates each row with a badge and a one-line reason. Pure and total
//! over the 0-100 percent range.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Badge constants
// ---------------------------------------------------------------------------

pub const BADGE_ELITE: &str = "Elite";
pub const BADGE_BOOSTED: &str = "Boosted";
pub const BADGE_GROWING: &str = "Growing";
pub const BADGE_STARTER: &str = "Starter";

/// Inclusive lower bounds, evaluated in descending order so ties resolve to
/// the higher badge.
pub const BADGE_ELITE_MIN_PERCENT: i32 = 90;
pub const BADGE_BOOSTED_MIN_PERCENT: i32 = 70;
pub const BADGE_GROWING_MIN_PERCENT: i32 = 40;

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Badge and rank reason attached to a public search result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatorBadge {
    pub badge: &'static str,
    pub rank_reason: &'static str,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Badge for a creator's stored booster percent.
pub fn badge(booster_percent: i32) -> CreatorBadge {
    if booster_percent >= BADGE_ELITE_MIN_PERCENT {
        CreatorBadge {
            badge: BADGE_ELITE,
            rank_reason: "Top boosted creator",
        }
    } else if booster_percent >= BADGE_BOOSTED_MIN_PERCENT {
        CreatorBadge {
            badge: BADGE_BOOSTED,
            rank_reason: "Strong boost signals",
        }
    } else if booster_percent >= BADGE_GROWING_MIN_PERCENT {
        CreatorBadge {
            badge: BADGE_GROWING,
            rank_reason: "Building trust quickly",
        }
    } else {
        CreatorBadge {
            badge: BADGE_STARTER,
            rank_reason: "New creator profile",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elite_at_90() {
        assert_eq!(badge(90).badge, BADGE_ELITE);
        assert_eq!(badge(100).badge, BADGE_ELITE);
    }

    #[test]
    fn boosted_from_70_to_89() {
        assert_eq!(badge(89).badge, BADGE_BOOSTED);
        assert_eq!(badge(70).badge, BADGE_BOOSTED);
    }

    #[test]
    fn growing_from_40_to_69() {
        assert_eq!(badge(69).badge, BADGE_GROWING);
        assert_eq!(badge(40).badge, BADGE_GROWING);
    }

    #[test]
    fn starter_below_40() {
        assert_eq!(badge(39).badge, BADGE_STARTER);
        assert_eq!(badge(0).badge, BADGE_STARTER);
    }

    #[test]
    fn reasons_match_badges() {
        assert_eq!(badge(95).rank_reason, "Top boosted creator");
        assert_eq!(badge(75).rank_reason, "Strong boost signals");
        assert_eq!(badge(45).rank_reason, "Building trust quickly");
        assert_eq!(badge(5).rank_reason, "New creator profile");
    }
}
