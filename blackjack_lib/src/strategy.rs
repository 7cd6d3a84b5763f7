//! Automated players.

use crate::error::BlackjackGameError;
use crate::round::{PlayerInterface, RoundEvent};
use log::trace;
use std::fmt::Display;

/// A player that bets a flat amount and keeps drawing until its total reaches `stand_on`.
/// Mirrors the dealer's own fixed drawing rule, useful for running sessions headless.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdStrategy {
    stand_on: u32,
    bet: u32,
}

impl ThresholdStrategy {
    /// Associated method for returning a new `ThresholdStrategy`.
    pub fn new(stand_on: u32, bet: u32) -> ThresholdStrategy {
        ThresholdStrategy { stand_on, bet }
    }

    /// A short description of the strategy, for summaries.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl PlayerInterface for ThresholdStrategy {
    /// Bets the flat amount, capped by the balance and raised to the table minimum.
    /// Stops answering once the balance can not cover the minimum.
    fn bet(&mut self, balance: u32, min_bet: u32) -> Result<u32, BlackjackGameError> {
        if balance < min_bet {
            trace!("balance {} under the minimum bet {}", balance, min_bet);
            return Err(BlackjackGameError::InputClosed);
        }
        Ok(u32::max(min_bet, u32::min(self.bet, balance)))
    }

    fn wants_card(&mut self, total: u32) -> Result<bool, BlackjackGameError> {
        Ok(total < self.stand_on)
    }

    fn notify(&mut self, event: RoundEvent<'_>) -> Result<(), BlackjackGameError> {
        trace!("{:?}", event);
        Ok(())
    }
}

impl Display for ThresholdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "flat bet {}, stand on {}", self.bet, self.stand_on)
    }
}
