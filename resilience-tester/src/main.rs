mod reports;
mod runner;
mod strategy;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use runner::{RunConfig, run_strategy};
use strategy::{ALL_STRATEGIES, Strategy};

#[derive(Debug, Parser)]
#[command(name = "resilience-tester", version)]
#[command(about = "Automated QA testing for Resilience - scripted strategies over the pure game logic")]
struct Args {
    /// Strategies to run (comma-separated)
    #[arg(long, default_value = "monolith-rush,service-split,caretaker")]
    strategies: String,

    /// List all available strategies and exit
    #[arg(long)]
    list_strategies: bool,

    /// Maximum actions submitted per run
    #[arg(long, default_value_t = 1_000)]
    max_actions: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_strategies {
        for strategy in ALL_STRATEGIES {
            println!("{:<14} {}", strategy.key(), strategy.describe());
        }
        return Ok(());
    }

    let strategies = parse_strategies(&args.strategies)?;
    let config = RunConfig {
        max_actions: args.max_actions,
    };
    let records: Vec<_> = strategies
        .into_iter()
        .map(|strategy| run_strategy(strategy, &config))
        .collect();

    if args.report == "json" {
        let rendered = reports::render_json(&records)?;
        write_output(args.output.as_deref(), &rendered)?;
    } else {
        reports::render_console(&records);
    }
    Ok(())
}

fn parse_strategies(input: &str) -> Result<Vec<Strategy>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            ALL_STRATEGIES
                .iter()
                .copied()
                .find(|strategy| strategy.key() == key)
                .with_context(|| format!("unknown strategy '{key}'"))
        })
        .collect()
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing report to {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
