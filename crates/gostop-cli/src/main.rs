use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use gostop_bot::{HeuristicPolicy, Policy};
use gostop_cli::logging::init_logging;
use gostop_cli::runner::GameRunner;
use gostop_core::rules::config::RuleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Difficulty {
    Easy,
    Normal,
}

/// Unattended Go-Stop matches between two computer policies.
#[derive(Debug, Parser)]
#[command(
    name = "gostop",
    author,
    version,
    about = "Deterministic Go-Stop bot runner"
)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// RNG seed for the first game; game i adds i to it.
    #[arg(long)]
    seed: Option<u64>,

    /// Captured-card score at which a round offers go or stop.
    #[arg(long, value_name = "POINTS")]
    stop_threshold: Option<u32>,

    /// Rounds per game.
    #[arg(long, value_name = "COUNT")]
    rounds: Option<u32>,

    /// Cards dealt to each hand.
    #[arg(long, value_name = "COUNT")]
    hand_size: Option<usize>,

    /// Cards dealt to the floor.
    #[arg(long, value_name = "COUNT")]
    floor_size: Option<usize>,

    /// End a round outright on a four-card sweep.
    #[arg(long)]
    bomb_ends_round: bool,

    /// Comma-separated go multiplier table, e.g. "1,1,2,4,8".
    #[arg(long, value_name = "TABLE")]
    go_table: Option<String>,

    /// Policy seated first.
    #[arg(long, value_enum, default_value = "normal")]
    first: Difficulty,

    /// Policy seated second.
    #[arg(long, value_enum, default_value = "normal")]
    second: Difficulty,

    /// Write JSON logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log every decision, not just warnings.
    #[arg(long)]
    verbose: bool,

    /// Print the run summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut rules = RuleConfig::default();
    if let Some(threshold) = cli.stop_threshold {
        rules.stop_threshold = threshold;
    }
    if let Some(rounds) = cli.rounds {
        rules.rounds_per_game = rounds;
    }
    if let Some(hand_size) = cli.hand_size {
        rules.hand_size = hand_size;
    }
    if let Some(floor_size) = cli.floor_size {
        rules.floor_size = floor_size;
    }
    if cli.bomb_ends_round {
        rules.bomb_ends_round_immediately = true;
    }
    if let Some(raw) = cli.go_table.as_deref() {
        rules.go_multiplier_table = parse_go_table(raw)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    let _logging_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let runner = GameRunner::new(rules, seed, cli.games)?;
    let mut policies: [Box<dyn Policy>; 2] = [policy_for(cli.first), policy_for(cli.second)];
    let summary = runner.run(&mut policies)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Played {} game{} from seed {}",
        summary.games,
        if summary.games == 1 { "" } else { "s" },
        summary.base_seed
    );
    println!(
        "Player 1 wins: {} | player 2 wins: {} | draws: {}",
        summary.wins[0], summary.wins[1], summary.draws
    );
    for report in &summary.reports {
        let result = match report.winner {
            Some(seat) => format!("{seat} wins {}:{}", report.scores[0], report.scores[1]),
            None => format!("draw {}:{}", report.scores[0], report.scores[1]),
        };
        println!(
            "  seed {}: {result} over {} round{}",
            report.seed,
            report.rounds,
            if report.rounds == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

fn parse_go_table(raw: &str) -> anyhow::Result<Vec<u32>> {
    raw.split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid go table entry '{}'", entry.trim()))
        })
        .collect()
}

fn policy_for(difficulty: Difficulty) -> Box<dyn Policy> {
    match difficulty {
        Difficulty::Easy => Box::new(HeuristicPolicy::easy()),
        Difficulty::Normal => Box::new(HeuristicPolicy::normal()),
    }
}
