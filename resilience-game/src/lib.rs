//! Resilience Game Engine
//!
//! Platform-agnostic core game logic for Resilience, the architecture
//! trade-off game: ship features into a monolith or split them into
//! services while budget, load, complexity, deployment risk, and
//! observability difficulty pull against each other. This crate provides
//! the full deterministic simulation without UI or platform dependencies;
//! renderers consume state snapshots and transition events through
//! [`GameSession`].

pub mod actions;
pub mod catalog;
pub mod constants;
pub mod events;
pub mod metrics;
pub mod progression;
pub mod result;
pub mod session;
pub mod solvency;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, ActionReceipt, ActionRejection, apply_action};
pub use catalog::{FEATURES, LEVELS, LevelSpec};
pub use events::{EventSet, GameEvent};
pub use metrics::{MetricTier, clamp_display};
pub use result::{Ending, RunSummary, run_summary};
pub use session::{ActionOutcome, GameSession};
pub use solvency::{PRIMARY_ACTIONS, can_fund_primary_action};
pub use state::{GameState, Service};
