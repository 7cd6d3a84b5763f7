//! Single table blackjack between one player and a dealer that draws through 14.
//!
//! The library holds the game itself: the card catalog, the deck, hand scoring, the round
//! engine and the session loop. Anything that talks to a person goes through the
//! `PlayerInterface` trait.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod participant;
pub mod round;
pub mod session;
pub mod strategy;
pub mod table;

pub use card::{standard_deck, Card, Rank, Suit};
pub use config::{GameConfig, GameConfigBuilder};
pub use deck::{CardSource, Deck, StackedDeck};
pub use error::BlackjackGameError;
pub use hand::{score, Hand, BLACKJACK, FACE_RANKS};
pub use outcome::{decide_outcome, Outcome, OutcomeCategory, Tally};
pub use participant::{Dealer, Participant, Player};
pub use round::{play_round, PlayerInterface, Round, RoundEvent, RoundResult, RoundState};
pub use session::{Session, SessionReport};
pub use strategy::ThresholdStrategy;
pub use table::{DealerStep, Table};

pub mod prelude {
    pub use super::{
        BlackjackGameError, Card, Deck, GameConfig, Hand, Outcome, Participant,
        PlayerInterface, RoundEvent, RoundResult, Session, SessionReport, ThresholdStrategy,
    };
}
