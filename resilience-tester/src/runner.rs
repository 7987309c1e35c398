//! Drives scripted strategies through complete runs of the game core.
use std::time::{Duration, Instant};

use log::{debug, warn};
use resilience_game::{GameEvent, GameSession, RunSummary, run_summary};
use serde::Serialize;

use crate::strategy::Strategy;

/// Limits for a single automated run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Hard cap on submitted actions; a healthy run terminates well below it.
    pub max_actions: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_actions: 1_000 }
    }
}

/// Outcome of one scripted run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub strategy: Strategy,
    pub actions_submitted: usize,
    pub actions_rejected: usize,
    pub levels_advanced: usize,
    /// Whether the run reached a terminal state within the action cap.
    pub completed: bool,
    pub duration: Duration,
    pub summary: RunSummary,
}

/// Play one full run with the given strategy.
#[must_use]
pub fn run_strategy(strategy: Strategy, config: &RunConfig) -> RunRecord {
    let started = Instant::now();
    let mut session = GameSession::new();
    let mut submitted = 0usize;
    let mut rejected = 0usize;
    let mut levels_advanced = 0usize;

    while !session.state().game_over && submitted < config.max_actions {
        let action = strategy.decide(session.state());
        let outcome = session.apply(action);
        submitted += 1;
        debug!("{strategy}: {action} accepted={}", outcome.accepted);
        levels_advanced += outcome
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::LevelAdvanced { .. }))
            .count();
        if !outcome.accepted {
            rejected += 1;
            // A deterministic strategy would resubmit the same action
            // forever; stop the run instead.
            warn!("{strategy} stalled on {action}; stopping run");
            break;
        }
    }

    RunRecord {
        strategy,
        actions_submitted: submitted,
        actions_rejected: rejected,
        levels_advanced,
        completed: session.state().game_over,
        duration: started.elapsed(),
        summary: run_summary(session.state()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resilience_game::Ending;

    #[test]
    fn monolith_rush_clears_the_ladder() {
        let record = run_strategy(Strategy::MonolithRush, &RunConfig::default());
        assert!(record.completed);
        assert_eq!(record.actions_rejected, 0);
        assert_eq!(record.summary.ending, Some(Ending::Victory));
        assert_eq!(record.summary.features_implemented, 79);
        assert_eq!(record.actions_submitted, 79);
        assert_eq!(record.levels_advanced, 9);
    }

    #[test]
    fn service_split_terminates_without_stalling() {
        let record = run_strategy(Strategy::ServiceSplit, &RunConfig::default());
        assert!(record.completed);
        assert_eq!(record.actions_rejected, 0);
        assert!(record.summary.ending.is_some());
        assert!(record.summary.services > 0);
    }

    #[test]
    fn caretaker_buys_mitigations_along_the_way() {
        let record = run_strategy(Strategy::Caretaker, &RunConfig::default());
        assert!(record.completed);
        assert_eq!(record.actions_rejected, 0);
        assert!(record.summary.ending.is_some());
        assert!(record.summary.circuit_breakers > 0);
        assert!(record.summary.cache_installations > 0);
        assert!(record.summary.score > 0);
    }
}
