use blackjack_lib::SessionReport;
use serde::Serialize;
use std::fmt::Display;

/// Simple struct for recording the interesting data points accumulated over many automated sessions
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationSummary {
    pub label: String,
    pub sessions: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub rounds: u32,
    pub total_final_balance: u64,
    /// Sessions that ended because the player could no longer cover the minimum bet.
    pub broke: u32,
}

impl SimulationSummary {
    pub fn new(label: String) -> Self {
        SimulationSummary {
            label,
            ..Default::default()
        }
    }

    /// Folds one finished session into the summary.
    pub fn record(&mut self, report: &SessionReport, min_bet: u32) {
        self.sessions += 1;
        self.wins += report.tally.wins;
        self.draws += report.tally.draws;
        self.losses += report.tally.losses;
        self.rounds += report.rounds_played;
        self.total_final_balance += u64::from(report.final_balance);
        if report.final_balance < min_bet {
            self.broke += 1;
        }
    }

    pub fn average_final_balance(&self) -> f64 {
        if self.sessions == 0 {
            return 0.0;
        }
        self.total_final_balance as f64 / self.sessions as f64
    }

    pub fn win_percentage(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }
}

impl Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 80;
        const TEXT_WIDTH: usize = "average final balance".len() + 20;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        let body = format!(
            "{}{}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}\n\
            {:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}\n",
            "strategy: ",
            self.label,
            "sessions played",
            self.sessions,
            "rounds played",
            self.rounds,
            "rounds won",
            self.wins,
            "rounds drawn",
            self.draws,
            "rounds lost",
            self.losses,
            "sessions ended broke",
            self.broke,
            "average final balance",
            self.average_final_balance(),
            "win percentage",
            self.win_percentage(),
        );
        write!(f, "{}", body)
    }
}
