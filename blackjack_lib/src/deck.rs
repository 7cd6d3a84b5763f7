use crate::card::{standard_deck, Card};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Trait for anything the table can draw cards from.
pub trait CardSource {
    /// Removes one card from the source, `None` once it is exhausted.
    fn draw(&mut self) -> Option<Card>;
    /// Number of cards left in the source.
    fn remaining(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// A single 52 card deck. Every draw removes a uniformly random remaining card,
/// drawn cards are never put back.
pub struct Deck<R: Rng = StdRng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<StdRng> {
    /// Associated function to create a full deck backed by an entropy seeded generator.
    pub fn new() -> Self {
        Deck::with_rng(StdRng::from_entropy())
    }

    /// Creates a full deck whose draw order is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Deck::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Deck<StdRng> {
    fn default() -> Self {
        Deck::new()
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a full deck that draws using `rng`.
    pub fn with_rng(rng: R) -> Self {
        Deck {
            cards: standard_deck().to_vec(),
            rng,
        }
    }

    /// The cards still in the deck, in no particular order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<R: Rng> CardSource for Deck<R> {
    fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        trace!("drew {} ({} cards left)", card, self.cards.len());
        Some(card)
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Card source that deals a fixed sequence front to back. Used to replay a known
/// order of cards.
#[derive(Debug, Clone, Default)]
pub struct StackedDeck {
    cards: VecDeque<Card>,
}

impl StackedDeck {
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        StackedDeck {
            cards: cards.into_iter().collect(),
        }
    }
}

impl CardSource for StackedDeck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
