//! Player action handlers: affordability guards, costs, and metric deltas.
//!
//! Every handler is a guarded transition on [`GameState`]: guards run before
//! any mutation, so a rejected action leaves the state bit-for-bit unchanged.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{
    CACHE_COMPLEXITY_RELIEF, CACHE_EFFICIENCY_GAIN, CACHE_LOAD_RELIEF,
    CIRCUIT_BREAKER_COMPLEXITY_RELIEF, CIRCUIT_BREAKER_RISK_RELIEF, COST_CACHE,
    COST_CIRCUIT_BREAKER, COST_CREATE_SERVICE, COST_MESSAGE_QUEUE, COST_MONITORING,
    COST_MONOLITH_FEATURE, COST_REFACTOR, COST_RETRY_LOGIC, COST_SERVICE_FEATURE,
    LOG_CACHE_INSTALLED, LOG_CIRCUIT_BREAKER_INSTALLED, LOG_MONITORING_INSTALLED,
    LOG_MONOLITH_FEATURE, LOG_QUEUE_INSTALLED, LOG_REFACTORED, LOG_RETRY_INSTALLED,
    LOG_SERVICE_CREATED, LOG_SERVICE_FEATURE, LOG_SERVICE_OVERGROWN, MONITORING_DIFFICULTY_RELIEF,
    MONITORING_SCORE_GAIN, MONOLITH_FEATURE_LOAD, MONOLITH_FEATURE_RISK, OVERGROWN_SUFFIX,
    QUEUE_COMPLEXITY_RELIEF, QUEUE_LOAD_RELIEF, QUEUE_RISK_RELIEF, REFACTOR_COMPLEXITY_RELIEF,
    REFACTOR_LOAD_RELIEF, REFACTOR_RISK_RELIEF, REFACTOR_SERVICE_FLOOR, REFACTOR_SERVICE_RELIEF,
    RETRY_DIFFICULTY_RELIEF, RETRY_RISK_RELIEF, SCORE_CACHE, SCORE_CIRCUIT_BREAKER,
    SCORE_CREATE_SERVICE, SCORE_MESSAGE_QUEUE, SCORE_MONITORING, SCORE_MONOLITH_FEATURE,
    SCORE_REFACTOR, SCORE_RETRY_LOGIC, SCORE_SERVICE_FEATURE, SERVICE_CREATE_COMPLEXITY,
    SERVICE_CREATE_OBS_DIFFICULTY, SERVICE_FEATURE_COMPLEXITY, SERVICE_FEATURE_LOAD,
    SERVICE_OVERGROWTH_PENALTY,
};
use crate::events::EventSet;
use crate::progression;
use crate::solvency;
use crate::state::{GameState, Service};

/// Everything a player can do with the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Action {
    /// Fold the offered feature into the monolith.
    AddToMonolith,
    /// Split the offered feature out into a new service.
    CreateService,
    /// Ship the offered feature inside an existing service.
    AddServiceFeature { service: usize },
    AddCache,
    AddMonitoring,
    AddCircuitBreaker,
    AddMessageQueue,
    AddRetryLogic,
    Refactor,
}

impl Action {
    /// Budget charged when the action is accepted.
    #[must_use]
    pub const fn cost(self) -> i32 {
        match self {
            Self::AddToMonolith => COST_MONOLITH_FEATURE,
            Self::CreateService => COST_CREATE_SERVICE,
            Self::AddServiceFeature { .. } => COST_SERVICE_FEATURE,
            Self::AddCache => COST_CACHE,
            Self::AddMonitoring => COST_MONITORING,
            Self::AddCircuitBreaker => COST_CIRCUIT_BREAKER,
            Self::AddMessageQueue => COST_MESSAGE_QUEUE,
            Self::AddRetryLogic => COST_RETRY_LOGIC,
            Self::Refactor => COST_REFACTOR,
        }
    }

    /// Score awarded on success.
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::AddToMonolith => SCORE_MONOLITH_FEATURE,
            Self::CreateService => SCORE_CREATE_SERVICE,
            Self::AddServiceFeature { .. } => SCORE_SERVICE_FEATURE,
            Self::AddCache => SCORE_CACHE,
            Self::AddMonitoring => SCORE_MONITORING,
            Self::AddCircuitBreaker => SCORE_CIRCUIT_BREAKER,
            Self::AddMessageQueue => SCORE_MESSAGE_QUEUE,
            Self::AddRetryLogic => SCORE_RETRY_LOGIC,
            Self::Refactor => SCORE_REFACTOR,
        }
    }

    /// Whether success consumes the offered feature and counts toward the
    /// current level.
    #[must_use]
    pub const fn advances_feature(self) -> bool {
        matches!(
            self,
            Self::AddToMonolith | Self::CreateService | Self::AddServiceFeature { .. }
        )
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AddToMonolith => "add_to_monolith",
            Self::CreateService => "create_service",
            Self::AddServiceFeature { .. } => "add_service_feature",
            Self::AddCache => "add_cache",
            Self::AddMonitoring => "add_monitoring",
            Self::AddCircuitBreaker => "add_circuit_breaker",
            Self::AddMessageQueue => "add_message_queue",
            Self::AddRetryLogic => "add_retry_logic",
            Self::Refactor => "refactor",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why an action was refused.
///
/// Rejections are ordinary outcomes, not faults: the state is untouched and
/// the caller decides whether to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum ActionRejection {
    #[error("cost {cost} exceeds remaining budget {budget}")]
    InsufficientBudget { cost: i32, budget: i32 },
    #[error("no service at index {index}")]
    UnknownService { index: usize },
    #[error("the run has already ended")]
    RunEnded,
}

/// Receipt for an accepted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub action: Action,
    pub cost: i32,
    pub score_awarded: i32,
    /// Ladder or terminal transitions triggered by this action.
    pub events: EventSet,
}

/// Apply one player action to the state.
///
/// Feature-shipping actions also advance the cyclic queue and run the level
/// check; every accepted action runs the solvency check afterwards.
///
/// # Errors
///
/// Returns the rejection when the run is over, the budget cannot cover the
/// cost, or a service index does not exist. No mutation happens on rejection.
pub fn apply_action(gs: &mut GameState, action: Action) -> Result<ActionReceipt, ActionRejection> {
    if gs.game_over {
        return Err(ActionRejection::RunEnded);
    }
    let cost = action.cost();
    if gs.budget < cost {
        return Err(ActionRejection::InsufficientBudget {
            cost,
            budget: gs.budget,
        });
    }
    if let Action::AddServiceFeature { service } = action {
        if service >= gs.services.len() {
            return Err(ActionRejection::UnknownService { index: service });
        }
    }

    gs.budget -= cost;
    match action {
        Action::AddToMonolith => add_to_monolith(gs),
        Action::CreateService => create_service(gs),
        Action::AddServiceFeature { service } => add_service_feature(gs, service),
        Action::AddCache => add_cache(gs),
        Action::AddMonitoring => add_monitoring(gs),
        Action::AddCircuitBreaker => add_circuit_breaker(gs),
        Action::AddMessageQueue => add_message_queue(gs),
        Action::AddRetryLogic => add_retry_logic(gs),
        Action::Refactor => refactor(gs),
    }
    gs.score += action.score();

    let mut events = EventSet::new();
    if action.advances_feature() {
        gs.features_implemented += 1;
        gs.level_features_completed += 1;
        gs.advance_feature_queue();
        progression::check_level(gs, &mut events);
    }
    solvency::check(gs, &mut events);

    Ok(ActionReceipt {
        action,
        cost,
        score_awarded: action.score(),
        events,
    })
}

/// Reduce a gauge by `amount`, flooring at zero.
fn relieve(value: &mut f32, amount: f32) {
    *value = (*value - amount).max(0.0);
}

fn add_to_monolith(gs: &mut GameState) {
    gs.monolith_features += 1;
    gs.monolith_load += MONOLITH_FEATURE_LOAD;
    gs.deployment_risk += MONOLITH_FEATURE_RISK;
    gs.push_log(LOG_MONOLITH_FEATURE);
}

fn create_service(gs: &mut GameState) {
    let feature = gs.current_feature();
    gs.services.push(Service::extracted_from(feature));
    gs.service_complexity += SERVICE_CREATE_COMPLEXITY;
    gs.observability_difficulty += SERVICE_CREATE_OBS_DIFFICULTY;
    gs.push_log(LOG_SERVICE_CREATED);
}

fn add_service_feature(gs: &mut GameState, index: usize) {
    let service = &mut gs.services[index];
    service.features += 1;
    service.complexity += SERVICE_FEATURE_COMPLEXITY;
    service.load += SERVICE_FEATURE_LOAD;
    let overgrown = service.is_overgrown();
    if overgrown {
        service.name.push_str(OVERGROWN_SUFFIX);
    }
    gs.push_log(LOG_SERVICE_FEATURE);
    if overgrown {
        gs.service_complexity += SERVICE_OVERGROWTH_PENALTY;
        gs.push_log(LOG_SERVICE_OVERGROWN);
    }
}

fn add_cache(gs: &mut GameState) {
    gs.cache_efficiency += CACHE_EFFICIENCY_GAIN;
    relieve(&mut gs.monolith_load, CACHE_LOAD_RELIEF);
    relieve(&mut gs.service_complexity, CACHE_COMPLEXITY_RELIEF);
    gs.push_log(LOG_CACHE_INSTALLED);
}

fn add_monitoring(gs: &mut GameState) {
    gs.observability_score += MONITORING_SCORE_GAIN;
    relieve(&mut gs.observability_difficulty, MONITORING_DIFFICULTY_RELIEF);
    gs.push_log(LOG_MONITORING_INSTALLED);
}

fn add_circuit_breaker(gs: &mut GameState) {
    gs.circuit_breakers += 1;
    relieve(&mut gs.deployment_risk, CIRCUIT_BREAKER_RISK_RELIEF);
    relieve(&mut gs.service_complexity, CIRCUIT_BREAKER_COMPLEXITY_RELIEF);
    gs.push_log(LOG_CIRCUIT_BREAKER_INSTALLED);
}

fn add_message_queue(gs: &mut GameState) {
    gs.message_queues += 1;
    relieve(&mut gs.monolith_load, QUEUE_LOAD_RELIEF);
    relieve(&mut gs.service_complexity, QUEUE_COMPLEXITY_RELIEF);
    relieve(&mut gs.deployment_risk, QUEUE_RISK_RELIEF);
    gs.push_log(LOG_QUEUE_INSTALLED);
}

fn add_retry_logic(gs: &mut GameState) {
    gs.retry_logic += 1;
    relieve(&mut gs.deployment_risk, RETRY_RISK_RELIEF);
    relieve(&mut gs.observability_difficulty, RETRY_DIFFICULTY_RELIEF);
    gs.push_log(LOG_RETRY_INSTALLED);
}

fn refactor(gs: &mut GameState) {
    relieve(&mut gs.service_complexity, REFACTOR_COMPLEXITY_RELIEF);
    relieve(&mut gs.monolith_load, REFACTOR_LOAD_RELIEF);
    relieve(&mut gs.deployment_risk, REFACTOR_RISK_RELIEF);
    // Services are refactored too, but never below their starting floor.
    for service in &mut gs.services {
        service.complexity =
            (service.complexity - REFACTOR_SERVICE_RELIEF).max(REFACTOR_SERVICE_FLOOR);
    }
    gs.push_log(LOG_REFACTORED);
}
