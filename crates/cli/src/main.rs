// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank scenarios runner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use handrank_eval::{
    HandCategory, evaluate,
    scenarios::{Expected, SCENARIOS, Scenario},
};

#[derive(Debug, Parser)]
struct Cli {
    /// Don't log the evaluated hands.
    #[clap(long, short)]
    quiet: bool,
    /// Run only the scenarios with this expected category.
    #[clap(long, short)]
    scenario: Vec<HandCategory>,
}

impl Cli {
    fn selects(&self, scenario: &Scenario) -> bool {
        match scenario.expected {
            _ if self.scenario.is_empty() => true,
            Expected::Category(category) => self.scenario.contains(&category),
            Expected::ParseError => false,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    for s in SCENARIOS.iter().filter(|s| cli.selects(s)) {
        let result = evaluate(&s.hand);
        if !s.expected.matches(&result) {
            let got = match result {
                Ok(category) => category.to_string(),
                Err(e) => e.to_string(),
            };

            bail!(
                "Test failed for hand {:?}. Expected: {}, Got: {got}",
                s.hand,
                s.expected
            );
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }

    println!("All tests passed.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_all_scenarios() {
        let cli = Cli::parse_from(["handrank"]);
        assert!(cli.scenario.is_empty());
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn select_scenarios() {
        let cli = Cli::parse_from(["handrank", "-q", "-s", "Straight", "--scenario", "full house"]);
        assert!(cli.quiet);
        assert_eq!(
            cli.scenario,
            vec![HandCategory::Straight, HandCategory::FullHouse]
        );

        let selected = SCENARIOS.iter().filter(|s| cli.selects(s)).count();
        assert_eq!(selected, 3);
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn unknown_category() {
        assert!(Cli::try_parse_from(["handrank", "-s", "Five of a Kind"]).is_err());
    }
}
