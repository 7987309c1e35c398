//! Display clamping and qualitative tiers for the bounded gauges.
//!
//! Gauge values in [`crate::state::GameState`] are never clamped internally;
//! load relieved below zero is floored at the point of mutation, while
//! complexity can sit above 100 until a renderer caps it here.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DISPLAY_MAX, TIER_CRITICAL_THRESHOLD, TIER_WARNING_THRESHOLD};

/// Clamp a raw gauge value into the displayable `[0, 100]` range.
#[must_use]
pub fn clamp_display(value: f32) -> f32 {
    value.clamp(0.0, DISPLAY_MAX)
}

/// Qualitative band a gauge renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTier {
    Safe,
    Warning,
    Critical,
}

impl MetricTier {
    /// Tier for a raw gauge value, computed on the clamped display value:
    /// below 50 is safe, 50–79 warns, 80 and above is critical.
    #[must_use]
    pub fn for_value(value: f32) -> Self {
        let display = clamp_display(value);
        if display < TIER_WARNING_THRESHOLD {
            Self::Safe
        } else if display < TIER_CRITICAL_THRESHOLD {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for MetricTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
