//! Report rendering for automated runs.
use anyhow::Result;
use colored::Colorize;
use resilience_game::Ending;

use crate::runner::RunRecord;

pub fn render_console(records: &[RunRecord]) {
    println!();
    println!("{}", "📊 Strategy Run Summary".bright_cyan().bold());
    println!("{}", "=======================".cyan());

    for record in records {
        let outcome = match record.summary.ending {
            Some(Ending::Victory) => "🏆 VICTORY".green(),
            Some(Ending::Bankrupt) => "💀 BANKRUPT".red(),
            None => "⏱ CAPPED".yellow(),
        };
        println!();
        println!("{} {}", outcome, record.strategy.to_string().bold());
        println!(
            "   Level {} ({}), score {}, budget {}",
            record.summary.level,
            record.summary.level_name,
            record.summary.score,
            record.summary.budget
        );
        println!(
            "   Features: {} shipped ({} in monolith, {} services, {} overgrown)",
            record.summary.features_implemented,
            record.summary.monolith_features,
            record.summary.services,
            record.summary.overgrown_services
        );
        println!(
            "   Mitigations: {} caches, {} monitors, {} breakers, {} queues, {} retries",
            record.summary.cache_installations,
            record.summary.monitoring_installations,
            record.summary.circuit_breakers,
            record.summary.message_queues,
            record.summary.retry_logic
        );
        println!(
            "   Actions: {} submitted, {} rejected, {} level advances, {:?}",
            record.actions_submitted,
            record.actions_rejected,
            record.levels_advanced,
            record.duration
        );
    }
    println!();
}

/// JSON report for machine consumption.
///
/// # Errors
///
/// Returns an error if the records cannot be serialized.
pub fn render_json(records: &[RunRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{RunConfig, run_strategy};
    use crate::strategy::Strategy;

    #[test]
    fn json_report_contains_strategy_keys() {
        let records = vec![run_strategy(Strategy::MonolithRush, &RunConfig::default())];
        let json = render_json(&records).expect("report renders");
        assert!(json.contains("\"monolith-rush\""));
        assert!(json.contains("\"ending\": \"victory\""));
    }
}
