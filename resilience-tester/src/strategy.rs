//! Scripted play strategies for automated runs.
use std::fmt;

use resilience_game::{Action, GameState, MetricTier};
use serde::Serialize;

/// Budget floor below which the careful strategies stop buying anything but
/// features. The longest level needs 15 features at 100 each before its
/// bonus lands.
const MITIGATION_RESERVE: i32 = 2_500;

/// Built-in gameplay strategies for automated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Ship every feature into the monolith and never mitigate.
    MonolithRush,
    /// Split aggressively into services and grow them, falling back to the
    /// monolith only when splitting is unaffordable.
    ServiceSplit,
    /// Ship features cheaply, split a service per level when reserves allow,
    /// and mitigate whichever gauge turns critical.
    Caretaker,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::MonolithRush,
    Strategy::ServiceSplit,
    Strategy::Caretaker,
];

impl Strategy {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MonolithRush => "monolith-rush",
            Self::ServiceSplit => "service-split",
            Self::Caretaker => "caretaker",
        }
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::MonolithRush => "pile every feature into the monolith, never mitigate",
            Self::ServiceSplit => "split into services as fast as the budget allows",
            Self::Caretaker => "cheap features plus mitigations for critical gauges",
        }
    }

    /// Pick the next action for the current state. Every returned action is
    /// affordable whenever the run is still live.
    #[must_use]
    pub fn decide(self, gs: &GameState) -> Action {
        match self {
            Self::MonolithRush => Action::AddToMonolith,
            Self::ServiceSplit => Self::decide_service_split(gs),
            Self::Caretaker => Self::decide_caretaker(gs),
        }
    }

    fn decide_service_split(gs: &GameState) -> Action {
        if gs.budget >= Action::CreateService.cost() {
            return Action::CreateService;
        }
        // Grow the service with the fewest features; first wins ties.
        let emptiest = gs
            .services
            .iter()
            .enumerate()
            .min_by_key(|(_, service)| service.features)
            .map(|(index, _)| Action::AddServiceFeature { service: index });
        if let Some(grow) = emptiest {
            if gs.budget >= grow.cost() {
                return grow;
            }
        }
        Action::AddToMonolith
    }

    fn decide_caretaker(gs: &GameState) -> Action {
        if gs.budget >= MITIGATION_RESERVE {
            if MetricTier::for_value(gs.deployment_risk) == MetricTier::Critical {
                return Action::AddCircuitBreaker;
            }
            if MetricTier::for_value(gs.monolith_load) == MetricTier::Critical {
                return Action::AddCache;
            }
            if MetricTier::for_value(gs.observability_difficulty) == MetricTier::Critical {
                return Action::AddMonitoring;
            }
            if MetricTier::for_value(gs.service_complexity) == MetricTier::Critical {
                return Action::Refactor;
            }
            if gs.services.len() < gs.level as usize {
                return Action::CreateService;
            }
        }
        Action::AddToMonolith
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_are_affordable_on_a_fresh_state() {
        let gs = GameState::new();
        for strategy in ALL_STRATEGIES {
            let action = strategy.decide(&gs);
            assert!(gs.budget >= action.cost(), "{strategy} overspends");
        }
    }

    #[test]
    fn service_split_prefers_the_emptiest_service() {
        let mut gs = GameState::new();
        gs.budget = 200;
        gs.services.push(resilience_game::Service {
            name: "User".to_string(),
            feature: "User Authentication".to_string(),
            complexity: 40.0,
            features: 3,
            load: 35.0,
        });
        gs.services.push(resilience_game::Service {
            name: "Payment".to_string(),
            feature: "Payment Processing".to_string(),
            complexity: 10.0,
            features: 1,
            load: 15.0,
        });
        assert_eq!(
            Strategy::ServiceSplit.decide(&gs),
            Action::AddServiceFeature { service: 1 }
        );
    }

    #[test]
    fn caretaker_mitigates_the_riskiest_gauge_first() {
        let mut gs = GameState::new();
        gs.deployment_risk = 85.0;
        gs.monolith_load = 90.0;
        assert_eq!(Strategy::Caretaker.decide(&gs), Action::AddCircuitBreaker);

        gs.deployment_risk = 40.0;
        assert_eq!(Strategy::Caretaker.decide(&gs), Action::AddCache);

        gs.budget = 500;
        assert_eq!(Strategy::Caretaker.decide(&gs), Action::AddToMonolith);
    }
}
