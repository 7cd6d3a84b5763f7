//! Hands and the hand scorer.

use crate::card::{Card, Rank};
use serde::Serialize;
use std::fmt::Display;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u32 = 21;

/// Ranks that count ten points.
pub const FACE_RANKS: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

/// Computes the blackjack total of `cards`.
///
/// Numerals count their face value and face cards count ten. Each ace then counts 11
/// unless that would push the running total over 21, in which case it counts 1.
/// Totals above 21 are returned as is.
pub fn score(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut num_aces = 0;
    for card in cards {
        match card.rank {
            Rank::Ace => num_aces += 1,
            Rank::Numeral(n) => total += n as u32,
            rank => {
                debug_assert!(FACE_RANKS.contains(&rank));
                total += 10;
            }
        }
    }

    for _ in 0..num_aces {
        total += if total + 11 <= BLACKJACK { 11 } else { 1 };
    }

    total
}

/// An ordered sequence of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Method for receiving a card, appended at the end of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The scored total of the hand.
    pub fn total(&self) -> u32 {
        score(&self.cards)
    }

    pub fn busted(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Empties the hand at the end of a round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", cards)
    }
}
