//! Round outcomes and the session tally.

use crate::hand::{Hand, BLACKJACK};
use serde::Serialize;
use std::fmt::Display;

/// Number of cards in a busted dealer hand that pays the player double.
pub const DOUBLE_WIN_DEALER_CARDS: usize = 3;

/// How a resolved round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Dealer busted holding exactly three cards, pays twice the bet.
    DoubleWin,
    Win,
    Draw,
    /// Player went over 21.
    Bust,
    /// Player stood under the dealer's total.
    Loss,
}

impl Outcome {
    /// The tally category this outcome is counted under.
    pub fn category(&self) -> OutcomeCategory {
        match self {
            Outcome::DoubleWin | Outcome::Win => OutcomeCategory::Win,
            Outcome::Draw => OutcomeCategory::Draw,
            Outcome::Bust | Outcome::Loss => OutcomeCategory::Loss,
        }
    }

    /// Signed change to the player's bankroll for a round played with `bet`.
    pub fn payout(&self, bet: u32) -> i64 {
        let bet = i64::from(bet);
        match self {
            Outcome::DoubleWin => 2 * bet,
            Outcome::Win => bet,
            Outcome::Draw => 0,
            Outcome::Bust | Outcome::Loss => -bet,
        }
    }
}

/// Decides the outcome of a round from the final hands.
///
/// A busted dealer loses before the player's hand is looked at. Otherwise a busted
/// player loses, equal totals draw, and the higher total wins.
pub fn decide_outcome(player: &Hand, dealer: &Hand) -> Outcome {
    let dealer_total = dealer.total();
    if dealer_total > BLACKJACK {
        return if dealer.len() == DOUBLE_WIN_DEALER_CARDS {
            Outcome::DoubleWin
        } else {
            Outcome::Win
        };
    }

    let player_total = player.total();
    if player_total > BLACKJACK {
        Outcome::Bust
    } else if player_total == dealer_total {
        Outcome::Draw
    } else if player_total > dealer_total {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutcomeCategory {
    Win,
    Loss,
    Draw,
}

impl Display for OutcomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeCategory::Win => write!(f, "Wins"),
            OutcomeCategory::Loss => write!(f, "Losses"),
            OutcomeCategory::Draw => write!(f, "Draws"),
        }
    }
}

/// Count of resolved rounds per outcome category. Counts only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    /// Counts one round under `category`.
    pub fn record(&mut self, category: OutcomeCategory) {
        match category {
            OutcomeCategory::Win => self.wins += 1,
            OutcomeCategory::Loss => self.losses += 1,
            OutcomeCategory::Draw => self.draws += 1,
        }
    }

    pub fn get(&self, category: OutcomeCategory) -> u32 {
        match category {
            OutcomeCategory::Win => self.wins,
            OutcomeCategory::Loss => self.losses,
            OutcomeCategory::Draw => self.draws,
        }
    }

    /// Total number of rounds counted.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Iterates the categories in report order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (OutcomeCategory, u32)> + '_ {
        [
            OutcomeCategory::Win,
            OutcomeCategory::Loss,
            OutcomeCategory::Draw,
        ]
        .into_iter()
        .map(move |category| (category, self.get(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.receive_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn higher_player_total_wins() {
        let player = hand(&[Rank::King, Rank::Queen]);
        let dealer = hand(&[Rank::King, Rank::Numeral(9)]);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::Win);
    }

    #[test]
    fn busted_player_loses_whatever_the_dealer_holds() {
        let player = hand(&[Rank::King, Rank::Numeral(5), Rank::Numeral(7)]);
        for dealer in [
            hand(&[Rank::King, Rank::Numeral(5)]),
            hand(&[Rank::King, Rank::Ace]),
        ] {
            assert_eq!(decide_outcome(&player, &dealer), Outcome::Bust);
        }
    }

    #[test]
    fn equal_totals_draw() {
        let player = hand(&[Rank::King, Rank::Numeral(8)]);
        let dealer = hand(&[Rank::Numeral(10), Rank::Numeral(8)]);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::Draw);
    }

    #[test]
    fn lower_player_total_loses() {
        let player = hand(&[Rank::King, Rank::Numeral(7)]);
        let dealer = hand(&[Rank::King, Rank::Numeral(9)]);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::Loss);
    }

    #[test]
    fn dealer_busting_on_the_third_card_pays_double() {
        let player = hand(&[Rank::Numeral(2), Rank::Numeral(3)]);
        let dealer = hand(&[Rank::King, Rank::Numeral(5), Rank::Queen]);
        assert_eq!(dealer.total(), 25);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::DoubleWin);
        assert_eq!(Outcome::DoubleWin.payout(15), 30);

        let dealer = hand(&[
            Rank::Numeral(2),
            Rank::Numeral(3),
            Rank::Numeral(9),
            Rank::King,
        ]);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::Win);
    }

    #[test]
    fn busted_dealer_beats_busted_player() {
        let player = hand(&[Rank::King, Rank::Queen, Rank::Numeral(2)]);
        let dealer = hand(&[Rank::King, Rank::Numeral(4), Rank::Queen]);
        assert_eq!(decide_outcome(&player, &dealer), Outcome::DoubleWin);
    }

    #[test]
    fn payouts_and_categories() {
        assert_eq!(Outcome::Win.payout(10), 10);
        assert_eq!(Outcome::Draw.payout(10), 0);
        assert_eq!(Outcome::Bust.payout(10), -10);
        assert_eq!(Outcome::Loss.payout(10), -10);
        assert_eq!(Outcome::DoubleWin.category(), OutcomeCategory::Win);
        assert_eq!(Outcome::Bust.category(), OutcomeCategory::Loss);
    }

    #[test]
    fn tally_counts_each_category() {
        let mut tally = Tally::new();
        tally.record(OutcomeCategory::Win);
        tally.record(OutcomeCategory::Win);
        tally.record(OutcomeCategory::Draw);
        assert_eq!(tally.get(OutcomeCategory::Win), 2);
        assert_eq!(tally.get(OutcomeCategory::Loss), 0);
        assert_eq!(tally.total(), 3);
        let labels: Vec<String> = tally.iter().map(|(c, n)| format!("{}: {}", c, n)).collect();
        assert_eq!(labels, vec!["Wins: 2", "Losses: 0", "Draws: 1"]);
    }
}
