use blackjack_cli::{init_logging, write_report, ConsolePlayer};
use blackjack_lib::prelude::*;
use clap::Parser;
use std::io;

/// Play blackjack against a dealer who draws through 14.
#[derive(Parser, Debug)]
#[command(name = "blackjack", version, about)]
struct Args {
    /// Seed the deck so the game can be replayed
    #[arg(long)]
    seed: Option<u64>,

    /// Do not wait for enter while the dealer draws
    #[arg(long)]
    no_pause: bool,

    /// Print the final record as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let deck = match args.seed {
        Some(seed) => Deck::seeded(seed),
        None => Deck::new(),
    };
    let mut session = Session::new(deck, GameConfig::default());
    let mut player = ConsolePlayer::new(io::stdin().lock(), io::stdout(), !args.no_pause);

    let report = match session.run(&mut player) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    } else if let Err(e) = write_report(&mut io::stdout(), &report) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
