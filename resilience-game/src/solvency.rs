//! Detects the stuck state: features still owed with no primary action
//! affordable.
use crate::actions::Action;
use crate::constants::LOG_BANKRUPT;
use crate::events::{EventSet, GameEvent};
use crate::result::Ending;
use crate::state::GameState;

/// The five actions whose affordability keeps a run alive.
///
/// The cheaper mitigations are deliberately absent: a run can end while
/// retry logic (80) is still payable.
pub const PRIMARY_ACTIONS: [Action; 5] = [
    Action::AddToMonolith,
    Action::CreateService,
    Action::AddCache,
    Action::AddMonitoring,
    Action::Refactor,
];

/// Whether at least one primary action fits the remaining budget.
#[must_use]
pub fn can_fund_primary_action(gs: &GameState) -> bool {
    PRIMARY_ACTIONS.iter().any(|action| gs.budget >= action.cost())
}

/// End the run when required progress can no longer be paid for.
///
/// Runs automatically after every accepted action.
pub fn check(gs: &mut GameState, events: &mut EventSet) {
    if gs.game_over {
        return;
    }
    if gs.features_remaining() > 0 && !can_fund_primary_action(gs) {
        gs.game_over = true;
        gs.ending = Some(Ending::Bankrupt);
        gs.push_log(LOG_BANKRUPT);
        events.push(GameEvent::GameOver);
    }
}
