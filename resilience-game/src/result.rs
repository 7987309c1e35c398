//! Terminal classification and end-of-run summary.
use serde::{Deserialize, Serialize};

use crate::state::GameState;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    /// Every level of the ladder cleared.
    Victory,
    /// No primary action affordable while features were still required.
    Bankrupt,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Victory => write!(f, "victory"),
            Ending::Bankrupt => write!(f, "bankrupt"),
        }
    }
}

/// The numbers worth reporting for a run, mid-flight or finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ending: Option<Ending>,
    pub score: i32,
    pub budget: i32,
    pub level: u32,
    pub level_name: String,
    pub features_implemented: u32,
    pub monolith_features: u32,
    pub services: usize,
    pub overgrown_services: usize,
    pub circuit_breakers: u32,
    pub message_queues: u32,
    pub retry_logic: u32,
    pub cache_installations: u32,
    pub monitoring_installations: u32,
}

/// Build a summary from the current state.
#[must_use]
pub fn run_summary(gs: &GameState) -> RunSummary {
    RunSummary {
        ending: gs.ending,
        score: gs.score,
        budget: gs.budget,
        level: gs.level,
        level_name: gs.current_level().name.to_string(),
        features_implemented: gs.features_implemented,
        monolith_features: gs.monolith_features,
        services: gs.services.len(),
        overgrown_services: gs.services.iter().filter(|s| s.is_overgrown()).count(),
        circuit_breakers: gs.circuit_breakers,
        message_queues: gs.message_queues,
        retry_logic: gs.retry_logic,
        cache_installations: gs.cache_installations(),
        monitoring_installations: gs.monitoring_installations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_fresh_state() {
        let summary = run_summary(&GameState::new());
        assert_eq!(summary.ending, None);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.budget, 3_000);
        assert_eq!(summary.level, 1);
        assert_eq!(summary.level_name, "Startup MVP");
        assert_eq!(summary.services, 0);
        assert_eq!(summary.cache_installations, 0);
    }

    #[test]
    fn ending_labels() {
        assert_eq!(Ending::Victory.to_string(), "victory");
        assert_eq!(Ending::Bankrupt.to_string(), "bankrupt");
    }
}
