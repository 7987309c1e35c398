//! Fixed feature queue and level ladder.
//!
//! Both tables are process-wide constants. The feature queue is cyclic:
//! after the last entry the index wraps back to the first rather than
//! stopping. The ladder is finite; meeting the final level's requirement
//! ends the run in victory instead of advancing further.
use serde::Serialize;

/// Feature names offered to the player, in queue order.
pub const FEATURES: [&str; 20] = [
    "User Authentication",
    "Payment Processing",
    "Email Notifications",
    "File Upload Service",
    "Real-time Chat",
    "Analytics Dashboard",
    "Search Functionality",
    "Mobile API",
    "Admin Panel",
    "Backup System",
    "Rate Limiting",
    "Data Export",
    "Multi-language Support",
    "Social Integration",
    "Advanced Reporting",
    "AI Recommendations",
    "Video Streaming",
    "Real-time Collaboration",
    "Blockchain Integration",
    "IoT Device Management",
];

/// One row of the level ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelSpec {
    /// Features that must be shipped before the level is complete.
    pub features_required: u32,
    /// Bankroll advertised for the level. Advancing grants a flat bonus
    /// regardless of this column; it feeds display only.
    pub budget_bonus: i32,
    pub name: &'static str,
}

pub const LEVELS: [LevelSpec; 10] = [
    LevelSpec { features_required: 3, budget_bonus: 3_000, name: "Startup MVP" },
    LevelSpec { features_required: 4, budget_bonus: 3_500, name: "Growing Product" },
    LevelSpec { features_required: 5, budget_bonus: 4_000, name: "Market Expansion" },
    LevelSpec { features_required: 6, budget_bonus: 4_500, name: "Enterprise Features" },
    LevelSpec { features_required: 7, budget_bonus: 5_000, name: "Global Scale" },
    LevelSpec { features_required: 8, budget_bonus: 5_500, name: "Advanced Platform" },
    LevelSpec { features_required: 9, budget_bonus: 6_000, name: "Industry Leader" },
    LevelSpec { features_required: 10, budget_bonus: 6_500, name: "Innovation Hub" },
    LevelSpec { features_required: 12, budget_bonus: 7_000, name: "Tech Giant" },
    LevelSpec { features_required: 15, budget_bonus: 8_000, name: "Ultimate Architecture" },
];

/// Feature name at a cyclic queue position.
#[must_use]
pub fn feature(index: usize) -> &'static str {
    FEATURES[index % FEATURES.len()]
}

/// Number of rungs on the level ladder.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn level_count() -> u32 {
    LEVELS.len() as u32
}

/// Ladder row for a 1-based level number, saturating at the final row.
#[must_use]
pub fn level(number: u32) -> &'static LevelSpec {
    let index = (number.saturating_sub(1) as usize).min(LEVELS.len() - 1);
    &LEVELS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_queue_wraps_instead_of_stopping() {
        assert_eq!(feature(0), "User Authentication");
        assert_eq!(feature(FEATURES.len()), feature(0));
        assert_eq!(feature(39), "IoT Device Management");
        assert_eq!(feature(40), feature(0));
    }

    #[test]
    fn ladder_rows_are_ordered_and_saturating() {
        assert_eq!(level_count(), 10);
        assert_eq!(level(1).name, "Startup MVP");
        assert_eq!(level(1).features_required, 3);
        assert_eq!(level(10).features_required, 15);
        // Out-of-range lookups pin to the final rung; the controller never
        // increments past it.
        assert_eq!(level(0).name, "Startup MVP");
        assert_eq!(level(99).name, "Ultimate Architecture");

        let mut previous = 0;
        for row in &LEVELS {
            assert!(row.features_required > previous);
            previous = row.features_required;
        }
    }
}
