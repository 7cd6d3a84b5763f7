//! The card catalog: suits, ranks and the 52 cards of one standard deck.

use lazy_static::lazy_static;
use serde::Serialize;
use std::fmt::Display;

/// The four suits of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", name)
    }
}

/// Card ranks. Numeral ranks carry their face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rank {
    Ace,
    Numeral(u8),
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in catalog order, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Numeral(2),
        Rank::Numeral(3),
        Rank::Numeral(4),
        Rank::Numeral(5),
        Rank::Numeral(6),
        Rank::Numeral(7),
        Rank::Numeral(8),
        Rank::Numeral(9),
        Rank::Numeral(10),
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "Ace"),
            Rank::Numeral(n) => write!(f, "{}", n),
            Rank::Jack => write!(f, "Jack"),
            Rank::Queen => write!(f, "Queen"),
            Rank::King => write!(f, "King"),
        }
    }
}

/// An immutable playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Associated function to create a new `Card`.
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    /// Returns true if the card is an ace.
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

lazy_static! {
    static ref STANDARD_DECK: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect();
}

/// Returns the 52 cards of one standard deck, suit by suit, without jokers.
pub fn standard_deck() -> &'static [Card] {
    &STANDARD_DECK
}
