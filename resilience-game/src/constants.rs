//! Centralized balance and tuning constants for Resilience game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_MONOLITH_FEATURE: &str = "log.monolith.feature";
pub(crate) const LOG_SERVICE_CREATED: &str = "log.service.created";
pub(crate) const LOG_SERVICE_FEATURE: &str = "log.service.feature";
pub(crate) const LOG_SERVICE_OVERGROWN: &str = "log.service.overgrown";
pub(crate) const LOG_CACHE_INSTALLED: &str = "log.cache.installed";
pub(crate) const LOG_MONITORING_INSTALLED: &str = "log.monitoring.installed";
pub(crate) const LOG_CIRCUIT_BREAKER_INSTALLED: &str = "log.circuit-breaker.installed";
pub(crate) const LOG_QUEUE_INSTALLED: &str = "log.queue.installed";
pub(crate) const LOG_RETRY_INSTALLED: &str = "log.retry.installed";
pub(crate) const LOG_REFACTORED: &str = "log.refactored";
pub(crate) const LOG_LEVEL_ADVANCED: &str = "log.level.advanced";
pub(crate) const LOG_VICTORY: &str = "log.victory";
pub(crate) const LOG_BANKRUPT: &str = "log.bankrupt";

// Starting state -----------------------------------------------------------
pub(crate) const INITIAL_BUDGET: i32 = 3_000;
pub(crate) const INITIAL_MONOLITH_LOAD: f32 = 20.0;
pub(crate) const INITIAL_SERVICE_COMPLEXITY: f32 = 10.0;
pub(crate) const INITIAL_DEPLOYMENT_RISK: f32 = 15.0;
pub(crate) const INITIAL_OBSERVABILITY_DIFFICULTY: f32 = 30.0;
pub(crate) const INITIAL_MONOLITH_FEATURES: u32 = 3;

// Action costs -------------------------------------------------------------
pub(crate) const COST_MONOLITH_FEATURE: i32 = 100;
pub(crate) const COST_CREATE_SERVICE: i32 = 400;
pub(crate) const COST_SERVICE_FEATURE: i32 = 150;
pub(crate) const COST_CACHE: i32 = 200;
pub(crate) const COST_MONITORING: i32 = 150;
pub(crate) const COST_CIRCUIT_BREAKER: i32 = 100;
pub(crate) const COST_MESSAGE_QUEUE: i32 = 250;
pub(crate) const COST_RETRY_LOGIC: i32 = 80;
pub(crate) const COST_REFACTOR: i32 = 300;

// Score awards -------------------------------------------------------------
pub(crate) const SCORE_MONOLITH_FEATURE: i32 = 50;
pub(crate) const SCORE_CREATE_SERVICE: i32 = 75;
pub(crate) const SCORE_SERVICE_FEATURE: i32 = 40;
pub(crate) const SCORE_CACHE: i32 = 50;
pub(crate) const SCORE_MONITORING: i32 = 40;
pub(crate) const SCORE_CIRCUIT_BREAKER: i32 = 35;
pub(crate) const SCORE_MESSAGE_QUEUE: i32 = 65;
pub(crate) const SCORE_RETRY_LOGIC: i32 = 30;
pub(crate) const SCORE_REFACTOR: i32 = 60;

// Monolith tuning ----------------------------------------------------------
pub(crate) const MONOLITH_FEATURE_LOAD: f32 = 15.0;
pub(crate) const MONOLITH_FEATURE_RISK: f32 = 10.0;

// Service tuning -----------------------------------------------------------
pub(crate) const SERVICE_START_COMPLEXITY: f32 = 10.0;
pub(crate) const SERVICE_START_LOAD: f32 = 15.0;
pub(crate) const SERVICE_CREATE_COMPLEXITY: f32 = 12.0;
pub(crate) const SERVICE_CREATE_OBS_DIFFICULTY: f32 = 8.0;
pub(crate) const SERVICE_FEATURE_COMPLEXITY: f32 = 15.0;
pub(crate) const SERVICE_FEATURE_LOAD: f32 = 10.0;
pub(crate) const SERVICE_OVERGROWTH_THRESHOLD: f32 = 80.0;
pub(crate) const SERVICE_OVERGROWTH_PENALTY: f32 = 20.0;
pub(crate) const OVERGROWN_SUFFIX: &str = "-Monolith";

// Mitigation tuning --------------------------------------------------------
pub(crate) const CACHE_EFFICIENCY_GAIN: f32 = 15.0;
pub(crate) const CACHE_LOAD_RELIEF: f32 = 12.0;
pub(crate) const CACHE_COMPLEXITY_RELIEF: f32 = 8.0;
pub(crate) const MONITORING_SCORE_GAIN: f32 = 20.0;
pub(crate) const MONITORING_DIFFICULTY_RELIEF: f32 = 15.0;
pub(crate) const CIRCUIT_BREAKER_RISK_RELIEF: f32 = 10.0;
pub(crate) const CIRCUIT_BREAKER_COMPLEXITY_RELIEF: f32 = 5.0;
pub(crate) const QUEUE_LOAD_RELIEF: f32 = 15.0;
pub(crate) const QUEUE_COMPLEXITY_RELIEF: f32 = 10.0;
pub(crate) const QUEUE_RISK_RELIEF: f32 = 8.0;
pub(crate) const RETRY_RISK_RELIEF: f32 = 8.0;
pub(crate) const RETRY_DIFFICULTY_RELIEF: f32 = 5.0;
pub(crate) const REFACTOR_COMPLEXITY_RELIEF: f32 = 20.0;
pub(crate) const REFACTOR_LOAD_RELIEF: f32 = 10.0;
pub(crate) const REFACTOR_RISK_RELIEF: f32 = 15.0;
pub(crate) const REFACTOR_SERVICE_RELIEF: f32 = 20.0;
pub(crate) const REFACTOR_SERVICE_FLOOR: f32 = 10.0;

// Progression --------------------------------------------------------------
pub(crate) const LEVEL_ADVANCE_BONUS: i32 = 1_000;

// Display thresholds -------------------------------------------------------
pub(crate) const DISPLAY_MAX: f32 = 100.0;
pub(crate) const TIER_WARNING_THRESHOLD: f32 = 50.0;
pub(crate) const TIER_CRITICAL_THRESHOLD: f32 = 80.0;
