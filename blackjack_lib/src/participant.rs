use crate::card::Card;
use crate::hand::Hand;
use std::fmt::Display;

/// Shared shape of everyone seated at the table.
pub trait Participant {
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;

    /// Method to receive a card into the participant's hand.
    fn receive_card(&mut self, card: Card) {
        self.hand_mut().receive_card(card);
    }

    /// The scored total of the participant's hand.
    fn total(&self) -> u32 {
        self.hand().total()
    }
}

/// The human player, holds a bankroll and a hand.
#[derive(Debug, Clone, Default)]
pub struct Player {
    balance: u32,
    hand: Hand,
}

impl Player {
    /// Associated function to create a new `Player` with `starting_balance` and an empty hand.
    pub fn new(starting_balance: u32) -> Player {
        Player {
            balance: starting_balance,
            hand: Hand::new(),
        }
    }

    /// Getter method for the players current balance.
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Method for determining whether the player can continue to play or not
    pub fn continue_play(&self, min_bet: u32) -> bool {
        self.balance > 0 && self.balance >= min_bet
    }

    /// Adds `amount` of winnings to the balance.
    pub fn collect_winnings(&mut self, amount: u32) {
        self.balance += amount;
    }

    /// Removes a lost bet from the balance. Bets never exceed the balance they were placed from,
    /// the subtraction saturates regardless.
    pub fn lose_bet(&mut self, amount: u32) {
        self.balance = self.balance.saturating_sub(amount);
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<21}{}\n{:<21}{}\n{:<21}{}",
            "hand:",
            self.hand,
            "hand value:",
            self.total(),
            "balance:",
            self.balance
        )
    }
}

/// The dealer, holds only a hand.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new() -> Dealer {
        Dealer { hand: Hand::new() }
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Display for Dealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<21}{}\n{:<21}{}",
            "hand:",
            self.hand,
            "hand value:",
            self.total()
        )
    }
}
