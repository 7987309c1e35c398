//! Level ladder transitions: completion checks, advance bonuses, victory.
use crate::catalog;
use crate::constants::{LEVEL_ADVANCE_BONUS, LOG_LEVEL_ADVANCED, LOG_VICTORY};
use crate::events::{EventSet, GameEvent};
use crate::result::Ending;
use crate::state::GameState;

/// Advance the ladder when the current level's feature requirement is met.
///
/// Runs automatically after every feature-shipping action. Below the
/// threshold this never mutates anything, so re-running the check is always
/// safe. Meeting the requirement on the final rung ends the run in victory
/// instead of advancing.
pub fn check_level(gs: &mut GameState, events: &mut EventSet) {
    if gs.level_features_completed < gs.current_level().features_required {
        return;
    }
    if gs.level < catalog::level_count() {
        gs.level += 1;
        gs.level_features_completed = 0;
        gs.budget += LEVEL_ADVANCE_BONUS;
        gs.push_log(LOG_LEVEL_ADVANCED);
        events.push(GameEvent::LevelAdvanced { level: gs.level });
    } else {
        gs.game_over = true;
        gs.ending = Some(Ending::Victory);
        gs.push_log(LOG_VICTORY);
        events.push(GameEvent::Victory);
    }
}
