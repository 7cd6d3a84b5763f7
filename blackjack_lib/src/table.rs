use crate::card::Card;
use crate::config::GameConfig;
use crate::deck::{CardSource, Deck};
use crate::error::BlackjackGameError;
use crate::hand::BLACKJACK;
use crate::outcome::{decide_outcome, Outcome, Tally};
use crate::participant::{Dealer, Participant, Player};
use crate::round::{Round, RoundResult, RoundState};
use log::{debug, info, warn};

/// Result of a single step of the dealer's automatic draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    Drew(Card),
    /// The dealer is above the draw threshold.
    Stood,
    /// The dealer had to draw but the deck is empty, the dealer stands.
    DeckExhausted,
}

/// Struct for the blackjack table: the deck, both seats and the session tally.
///
/// The round engine lives here as a set of steps, each taking the `Round` it advances.
/// Steps called out of order return `BlackjackGameError::InvalidState` and change nothing.
pub struct Table<S: CardSource = Deck> {
    deck: S,
    player: Player,
    dealer: Dealer,
    tally: Tally,
    config: GameConfig,
}

impl<S: CardSource> Table<S> {
    /// Associated function to seat a fresh player and dealer at a table dealing from `deck`.
    pub fn new(deck: S, config: GameConfig) -> Self {
        Table {
            deck,
            player: Player::new(config.starting_balance),
            dealer: Dealer::new(),
            tally: Tally::new(),
            config,
        }
    }

    pub fn deck(&self) -> &S {
        &self.deck
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validates `bet` against the table minimum and the player's balance and opens a round.
    pub fn place_bet(&self, bet: u32) -> Result<Round, BlackjackGameError> {
        let balance = self.player.balance();
        if bet < self.config.min_bet || bet > balance {
            return Err(BlackjackGameError::InvalidBet {
                bet,
                min_bet: self.config.min_bet,
                balance,
            });
        }
        debug_assert!(self.player.hand().is_empty() && self.dealer.hand().is_empty());
        info!("bet of {} placed with a balance of {}", bet, balance);
        Ok(Round::new(bet))
    }

    /// Deals two cards each, alternating player and dealer, player first.
    /// Returns false if the deck ran out before all four cards were dealt. That round
    /// skips straight to its decision state with the player standing, and resolves as a
    /// push.
    pub fn deal_initial(&mut self, round: &mut Round) -> Result<bool, BlackjackGameError> {
        round.require_state(&[RoundState::BetPlaced], "a placed bet")?;
        round.enter(RoundState::InitialDeal);

        for _ in 0..2 {
            if !self.deal_to_player() || !self.deal_to_dealer() {
                warn!(
                    "deck exhausted during the initial deal, player holds {} and dealer {} cards",
                    self.player.hand().len(),
                    self.dealer.hand().len()
                );
                round.void();
                round.enter(RoundState::PlayerDecision);
                return Ok(false);
            }
        }

        debug!(
            "dealt player [{}] ({}), dealer [{}] ({})",
            self.player.hand(),
            self.player.total(),
            self.dealer.hand(),
            self.dealer.total()
        );
        Ok(true)
    }

    fn deal_to_player(&mut self) -> bool {
        self.deck
            .draw()
            .map(|card| self.player.receive_card(card))
            .is_some()
    }

    fn deal_to_dealer(&mut self) -> bool {
        self.deck
            .draw()
            .map(|card| self.dealer.receive_card(card))
            .is_some()
    }

    /// True while the dealer's total is at or below the draw threshold.
    pub fn dealer_must_draw(&self) -> bool {
        self.dealer.total() <= self.config.dealer_stands_above
    }

    /// Advances the dealer's automatic draw by one card.
    pub fn dealer_step(&mut self, round: &mut Round) -> Result<DealerStep, BlackjackGameError> {
        round.require_state(
            &[RoundState::InitialDeal, RoundState::DealerAutoDraw],
            "the initial deal or the dealer's draw",
        )?;

        if !self.dealer_must_draw() {
            debug!("dealer stands on {}", self.dealer.total());
            round.enter(RoundState::PlayerDecision);
            return Ok(DealerStep::Stood);
        }

        round.enter(RoundState::DealerAutoDraw);
        match self.deck.draw() {
            Some(card) => {
                self.dealer.receive_card(card);
                debug!("dealer drew {}, total {}", card, self.dealer.total());
                Ok(DealerStep::Drew(card))
            }
            None => {
                warn!("deck exhausted while the dealer was drawing, dealer stands");
                round.enter(RoundState::PlayerDecision);
                Ok(DealerStep::DeckExhausted)
            }
        }
    }

    /// True while the player may still be offered a card: the dealer has not busted,
    /// the player has not stood and is under 21.
    pub fn player_can_draw(&self, round: &Round) -> bool {
        round.state() == RoundState::PlayerDecision
            && !round.player_stood()
            && self.dealer.total() <= BLACKJACK
            && self.player.total() < BLACKJACK
    }

    /// Draws one card for the player. Returns `None` if the deck is empty.
    pub fn player_hit(&mut self, round: &mut Round) -> Result<Option<Card>, BlackjackGameError> {
        if !self.player_can_draw(round) {
            return Err(BlackjackGameError::InvalidState {
                expected: "a player decision under 21 against a standing dealer",
                found: round.state(),
            });
        }

        match self.deck.draw() {
            Some(card) => {
                self.player.receive_card(card);
                debug!("player drew {}, total {}", card, self.player.total());
                Ok(Some(card))
            }
            None => {
                warn!("deck exhausted while the player was drawing");
                Ok(None)
            }
        }
    }

    pub fn player_stand(&mut self, round: &mut Round) -> Result<(), BlackjackGameError> {
        round.require_state(&[RoundState::PlayerDecision], "a player decision")?;
        debug!("player stands on {}", self.player.total());
        round.stand();
        Ok(())
    }

    /// Settles the round: pays or collects the bet, records the outcome and clears both hands.
    /// A short deal settles as a draw whatever the hands hold.
    pub fn resolve(&mut self, round: &mut Round) -> Result<RoundResult, BlackjackGameError> {
        round.require_state(&[RoundState::PlayerDecision], "a player decision")?;

        let outcome = if round.short_deal() {
            Outcome::Draw
        } else {
            decide_outcome(self.player.hand(), self.dealer.hand())
        };
        let balance_change = outcome.payout(round.bet());
        let amount = u32::try_from(balance_change.unsigned_abs()).unwrap_or(u32::MAX);
        if balance_change >= 0 {
            self.player.collect_winnings(amount);
        } else {
            self.player.lose_bet(amount);
        }

        let result = RoundResult {
            outcome,
            bet: round.bet(),
            balance_change,
            balance: self.player.balance(),
            player_cards: self.player.hand().cards().to_vec(),
            player_total: self.player.total(),
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_total: self.dealer.total(),
        };

        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.tally.record(outcome.category());
        round.enter(RoundState::Resolved);

        info!(
            "round resolved as {:?}: player {} vs dealer {}, balance {} ({:+})",
            outcome, result.player_total, result.dealer_total, result.balance, balance_change
        );
        Ok(result)
    }
}
