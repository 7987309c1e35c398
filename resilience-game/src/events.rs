//! Transition events surfaced to the presentation layer.
//!
//! The state is already consistent when an event is emitted; whether (and
//! when) to show a modal for it is entirely the consumer's choice.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity covers the worst case for a single action: one ladder
/// transition plus one terminal transition.
pub type EventSet = SmallVec<[GameEvent; 2]>;

/// Markers for the transitions a renderer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// The ladder moved; `level` is the new 1-based level number.
    LevelAdvanced { level: u32 },
    /// Final level cleared; the run is over and replayable via restart.
    Victory,
    /// No primary action affordable with features still owed.
    GameOver,
}
