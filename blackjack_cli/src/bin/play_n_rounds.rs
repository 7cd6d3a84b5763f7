use blackjack_cli::{init_logging, SimulationSummary};
use blackjack_lib::prelude::*;
use clap::Parser;
use log::info;

/// Run complete blackjack sessions with an automated player and print the aggregated stats.
#[derive(Parser, Debug)]
#[command(name = "play_n_rounds", version, about)]
struct Args {
    /// Number of sessions to play
    sessions: u32,

    /// The automated player stops drawing at this total
    #[arg(long, default_value_t = 17)]
    stand_on: u32,

    /// Flat bet placed every round
    #[arg(long, default_value_t = 10)]
    bet: u32,

    /// Seed for the first session, each following session uses the next seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let config = GameConfig::default();
    let strategy = ThresholdStrategy::new(args.stand_on, args.bet);
    let mut summary = SimulationSummary::new(strategy.label());

    for i in 0..args.sessions {
        let deck = match args.seed {
            Some(seed) => Deck::seeded(seed.wrapping_add(u64::from(i))),
            None => Deck::new(),
        };
        let mut session = Session::new(deck, config);
        let mut player = strategy;
        match session.run(&mut player) {
            Ok(report) => {
                info!("session #{} finished with {}", i + 1, report.final_balance);
                summary.record(&report, config.min_bet);
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", "-".repeat(80));
        print!("{}", summary);
        println!("{}", "-".repeat(80));
    }
}
