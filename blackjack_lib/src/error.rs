use thiserror::Error;

/// Errors produced while playing a game of blackjack.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    /// The bet is under the table minimum or more than the player holds.
    #[error("invalid bet of {bet}, bets must be at least {min_bet} and at most {balance}")]
    InvalidBet { bet: u32, min_bet: u32, balance: u32 },

    /// Input from the player could not be understood.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A round step was called in the wrong state.
    #[error("round is in state {found:?}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        found: crate::round::RoundState,
    },

    /// A round was started at a table where no round can be played.
    #[error("no round can be played with a balance of {balance} and {cards_remaining} cards left")]
    SessionOver { balance: u32, cards_remaining: usize },

    /// The player's input stream ended.
    #[error("player input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BlackjackGameError {
    /// Returns true for errors that are handled by asking the player again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BlackjackGameError::InvalidBet { .. } | BlackjackGameError::InvalidInput(_)
        )
    }
}
