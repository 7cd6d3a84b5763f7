//! The session controller, plays rounds until the player cannot bet or the deck is empty.

use crate::config::GameConfig;
use crate::deck::{CardSource, Deck};
use crate::error::BlackjackGameError;
use crate::outcome::Tally;
use crate::round::{play_round, PlayerInterface, RoundEvent, RoundResult};
use crate::table::Table;
use log::info;
use serde::Serialize;
use std::fmt::Display;

/// Final state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub tally: Tally,
    pub final_balance: u32,
    pub rounds_played: u32,
    pub cards_remaining: usize,
    /// True if player input closed before the session reached a terminal condition.
    pub ended_early: bool,
}

impl Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 80;
        const TEXT_WIDTH: usize = "cards left in the deck:".len() + 20;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

        writeln!(f, "{}", "-".repeat(WIDTH))?;
        writeln!(f, "{:-^WIDTH$}", "record")?;
        for (category, count) in self.tally.iter() {
            let label = format!("{}:", category);
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", label, count)?;
        }
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "rounds played:", self.rounds_played
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "cards left in the deck:", self.cards_remaining
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "final balance:", self.final_balance
        )?;
        write!(f, "{}", "-".repeat(WIDTH))
    }
}

/// Struct that owns the table for a whole game and loops rounds over it.
pub struct Session<S: CardSource = Deck> {
    table: Table<S>,
    rounds_played: u32,
    ended_early: bool,
}

impl<S: CardSource> Session<S> {
    /// Associated function to start a session at a fresh table dealing from `deck`.
    pub fn new(deck: S, config: GameConfig) -> Self {
        Session {
            table: Table::new(deck, config),
            rounds_played: 0,
            ended_early: false,
        }
    }

    pub fn table(&self) -> &Table<S> {
        &self.table
    }

    /// True while the deck has cards and the player can cover the minimum bet.
    pub fn can_continue(&self) -> bool {
        !self.table.deck().is_empty()
            && self
                .table
                .player()
                .continue_play(self.table.config().min_bet)
    }

    /// Plays a single round, announcing it to `interface` first.
    /// Returns `SessionOver` without asking for a bet once the session can not continue.
    pub fn play_round<I: PlayerInterface>(
        &mut self,
        interface: &mut I,
    ) -> Result<RoundResult, BlackjackGameError> {
        if !self.can_continue() {
            return Err(BlackjackGameError::SessionOver {
                balance: self.table.player().balance(),
                cards_remaining: self.table.deck().remaining(),
            });
        }
        interface.notify(RoundEvent::RoundStarting {
            balance: self.table.player().balance(),
            cards_remaining: self.table.deck().remaining(),
        })?;
        let result = play_round(&mut self.table, interface)?;
        self.rounds_played += 1;
        Ok(result)
    }

    /// Plays rounds until the session is over and returns the final report.
    /// Closed player input ends the session early, any other non recoverable error is returned.
    pub fn run<I: PlayerInterface>(
        &mut self,
        interface: &mut I,
    ) -> Result<SessionReport, BlackjackGameError> {
        while self.can_continue() {
            match self.play_round(interface) {
                Ok(_) => {}
                Err(BlackjackGameError::InputClosed) => {
                    info!("player input closed after {} rounds", self.rounds_played);
                    self.ended_early = true;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let report = self.report();
        info!(
            "session over: {} wins, {} losses, {} draws, balance {}",
            report.tally.wins, report.tally.losses, report.tally.draws, report.final_balance
        );
        Ok(report)
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            tally: *self.table.tally(),
            final_balance: self.table.player().balance(),
            rounds_played: self.rounds_played,
            cards_remaining: self.table.deck().remaining(),
            ended_early: self.ended_early,
        }
    }
}
