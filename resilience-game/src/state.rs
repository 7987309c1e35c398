//! Core aggregate state for a single architecture run.
use serde::{Deserialize, Serialize};

use crate::catalog::{self, LevelSpec};
use crate::constants::{
    CACHE_EFFICIENCY_GAIN, INITIAL_BUDGET, INITIAL_DEPLOYMENT_RISK, INITIAL_MONOLITH_FEATURES,
    INITIAL_MONOLITH_LOAD, INITIAL_OBSERVABILITY_DIFFICULTY, INITIAL_SERVICE_COMPLEXITY,
    MONITORING_SCORE_GAIN, SERVICE_OVERGROWTH_THRESHOLD, SERVICE_START_COMPLEXITY,
    SERVICE_START_LOAD,
};
use crate::result::Ending;

/// An extracted service bearing its own complexity, load, and feature count.
///
/// Services are created by the split action and never deleted; only their
/// own fields mutate afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Display name, derived from the seeding feature. Gains a `-Monolith`
    /// suffix whenever the service crosses the overgrowth threshold.
    pub name: String,
    /// Feature that seeded the service; immutable after extraction.
    pub feature: String,
    pub complexity: f32,
    pub features: u32,
    pub load: f32,
}

impl Service {
    /// A fresh service extracted for the given feature.
    #[must_use]
    pub fn extracted_from(feature: &str) -> Self {
        let name = feature
            .split_whitespace()
            .next()
            .unwrap_or(feature)
            .to_string();
        Self {
            name,
            feature: feature.to_string(),
            complexity: SERVICE_START_COMPLEXITY,
            features: 1,
            load: SERVICE_START_LOAD,
        }
    }

    /// Whether the service has accreted enough complexity to count as a
    /// mini-monolith.
    #[must_use]
    pub fn is_overgrown(&self) -> bool {
        self.complexity >= SERVICE_OVERGROWTH_THRESHOLD
    }
}

/// The single aggregate mutated only by
/// [`apply_action`](crate::actions::apply_action).
///
/// Gauges are stored raw; rendering clamps them through
/// [`clamp_display`](crate::metrics::clamp_display).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub budget: i32,
    pub score: i32,
    pub monolith_load: f32,
    pub service_complexity: f32,
    pub deployment_risk: f32,
    pub observability_difficulty: f32,
    /// Monotone accumulator; never reduced once earned.
    pub cache_efficiency: f32,
    /// Monotone accumulator; never reduced once earned.
    pub observability_score: f32,
    pub features_implemented: u32,
    pub monolith_features: u32,
    /// Insertion order is creation order; append-only.
    pub services: Vec<Service>,
    /// Cyclic index into [`catalog::FEATURES`].
    pub current_feature_index: usize,
    /// 1-based rung on the level ladder.
    pub level: u32,
    pub level_features_completed: u32,
    pub circuit_breakers: u32,
    pub message_queues: u32,
    pub retry_logic: u32,
    /// Terminal flag; once set, every action is rejected until restart.
    pub game_over: bool,
    #[serde(default)]
    pub ending: Option<Ending>,
    /// Machine-readable log keys appended as mutations happen.
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting state for a fresh run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            budget: INITIAL_BUDGET,
            score: 0,
            monolith_load: INITIAL_MONOLITH_LOAD,
            service_complexity: INITIAL_SERVICE_COMPLEXITY,
            deployment_risk: INITIAL_DEPLOYMENT_RISK,
            observability_difficulty: INITIAL_OBSERVABILITY_DIFFICULTY,
            cache_efficiency: 0.0,
            observability_score: 0.0,
            features_implemented: 0,
            monolith_features: INITIAL_MONOLITH_FEATURES,
            services: Vec::new(),
            current_feature_index: 0,
            level: 1,
            level_features_completed: 0,
            circuit_breakers: 0,
            message_queues: 0,
            retry_logic: 0,
            game_over: false,
            ending: None,
            logs: Vec::new(),
        }
    }

    /// Reset every field to the starting values for a fresh run.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Ladder row for the level currently in play.
    #[must_use]
    pub fn current_level(&self) -> &'static LevelSpec {
        catalog::level(self.level)
    }

    /// Feature name currently offered by the cyclic queue.
    #[must_use]
    pub fn current_feature(&self) -> &'static str {
        catalog::feature(self.current_feature_index)
    }

    /// Features still owed before the current level is complete.
    #[must_use]
    pub fn features_remaining(&self) -> u32 {
        self.current_level()
            .features_required
            .saturating_sub(self.level_features_completed)
    }

    /// Number of cache systems installed, derived from the efficiency
    /// accumulator.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cache_installations(&self) -> u32 {
        (self.cache_efficiency / CACHE_EFFICIENCY_GAIN) as u32
    }

    /// Number of monitoring stacks installed, derived from the score
    /// accumulator.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn monitoring_installations(&self) -> u32 {
        (self.observability_score / MONITORING_SCORE_GAIN) as u32
    }

    pub(crate) fn advance_feature_queue(&mut self) {
        self.current_feature_index = (self.current_feature_index + 1) % catalog::FEATURES.len();
    }

    pub(crate) fn push_log(&mut self, key: &str) {
        self.logs.push(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_starting_values() {
        let gs = GameState::new();
        assert_eq!(gs.budget, 3_000);
        assert_eq!(gs.monolith_load, 20.0);
        assert_eq!(gs.service_complexity, 10.0);
        assert_eq!(gs.deployment_risk, 15.0);
        assert_eq!(gs.observability_difficulty, 30.0);
        assert_eq!(gs.monolith_features, 3);
        assert_eq!(gs.level, 1);
        assert_eq!(gs.current_feature(), "User Authentication");
        assert_eq!(gs.features_remaining(), 3);
        assert!(!gs.game_over);
        assert!(gs.logs.is_empty());
    }

    #[test]
    fn restart_discards_everything() {
        let mut gs = GameState::new();
        gs.budget = 12;
        gs.score = 999;
        gs.services.push(Service::extracted_from("Real-time Chat"));
        gs.game_over = true;
        gs.ending = Some(Ending::Bankrupt);
        gs.push_log("log.bankrupt");

        gs.restart();
        assert_eq!(gs, GameState::new());
    }

    #[test]
    fn feature_queue_advances_cyclically() {
        let mut gs = GameState::new();
        for _ in 0..crate::catalog::FEATURES.len() {
            gs.advance_feature_queue();
        }
        assert_eq!(gs.current_feature_index, 0);
        gs.advance_feature_queue();
        assert_eq!(gs.current_feature(), "Payment Processing");
    }

    #[test]
    fn service_extraction_uses_leading_word() {
        let service = Service::extracted_from("Payment Processing");
        assert_eq!(service.name, "Payment");
        assert_eq!(service.feature, "Payment Processing");
        assert_eq!(service.complexity, 10.0);
        assert_eq!(service.features, 1);
        assert_eq!(service.load, 15.0);
        assert!(!service.is_overgrown());
    }

    #[test]
    fn installation_counts_floor_partial_accumulation() {
        let mut gs = GameState::new();
        gs.cache_efficiency = 44.9;
        gs.observability_score = 60.0;
        assert_eq!(gs.cache_installations(), 2);
        assert_eq!(gs.monitoring_installations(), 3);
    }
}
