//! Front ends for `blackjack_lib`: the terminal player and summaries of automated runs.

pub mod console;
pub mod summary;

pub use console::{write_report, ConsolePlayer};
pub use summary::SimulationSummary;

/// Sets up `env_logger`, quiet unless `RUST_LOG` asks for more so log lines do not
/// interleave with the game.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
