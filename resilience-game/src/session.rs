//! Session facade owning the single mutable [`GameState`].
use serde::{Deserialize, Serialize};

use crate::actions::{self, Action, ActionRejection};
use crate::events::EventSet;
use crate::state::GameState;

/// Result of submitting one action: whether it was accepted, why not, any
/// transition events, and a display snapshot taken after the attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub accepted: bool,
    pub rejection: Option<ActionRejection>,
    pub events: EventSet,
    pub snapshot: GameState,
}

/// Exclusive owner of a run's [`GameState`].
///
/// All mutation goes through [`GameSession::apply`]; readers get clones via
/// [`GameSession::snapshot`] and never a handle they can mutate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Start a session at the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Submit one player action.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match actions::apply_action(&mut self.state, action) {
            Ok(receipt) => ActionOutcome {
                accepted: true,
                rejection: None,
                events: receipt.events,
                snapshot: self.state.clone(),
            },
            Err(rejection) => ActionOutcome {
                accepted: false,
                rejection: Some(rejection),
                events: EventSet::new(),
                snapshot: self.state.clone(),
            },
        }
    }

    /// Read-only view of the live state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Display copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Reset to the initial state; works after a loss and as replay after
    /// victory. Returns the fresh snapshot.
    pub fn restart(&mut self) -> GameState {
        self.state.restart();
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GameEvent;
    use crate::result::Ending;

    #[test]
    fn accepted_action_reports_snapshot() {
        let mut session = GameSession::new();
        let outcome = session.apply(Action::AddToMonolith);
        assert!(outcome.accepted);
        assert_eq!(outcome.rejection, None);
        assert_eq!(outcome.snapshot.budget, 2_900);
        assert_eq!(outcome.snapshot, session.snapshot());
    }

    #[test]
    fn rejected_action_reports_unchanged_snapshot() {
        let mut session = GameSession::new();
        let before = session.snapshot();
        let outcome = session.apply(Action::AddServiceFeature { service: 3 });
        assert!(!outcome.accepted);
        assert_eq!(
            outcome.rejection,
            Some(ActionRejection::UnknownService { index: 3 })
        );
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.snapshot, before);
    }

    #[test]
    fn restart_replays_after_the_run_ends() {
        let mut session = GameSession::new();
        // Message queues drain the budget to zero without shipping features.
        let mut outcome = session.apply(Action::AddMessageQueue);
        while !session.state().game_over {
            outcome = session.apply(Action::AddMessageQueue);
            assert!(outcome.accepted);
        }
        assert!(outcome.events.contains(&GameEvent::GameOver));
        assert_eq!(session.state().ending, Some(Ending::Bankrupt));

        let fresh = session.restart();
        assert_eq!(fresh, GameState::new());
        assert!(session.apply(Action::AddToMonolith).accepted);
    }
}
