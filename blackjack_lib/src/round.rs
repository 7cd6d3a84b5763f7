//! A single betting round: its state machine, the events it reports and the driver that
//! plays it against a `PlayerInterface`.

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::BlackjackGameError;
use crate::hand::Hand;
use crate::outcome::Outcome;
use crate::participant::Participant;
use crate::table::{DealerStep, Table};
use log::debug;
use serde::Serialize;

/// The phase a round has most recently entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundState {
    BetPlaced,
    InitialDeal,
    DealerAutoDraw,
    PlayerDecision,
    Resolved,
}

/// A round in progress. Only exists between an accepted bet and its resolution.
#[derive(Debug)]
pub struct Round {
    bet: u32,
    state: RoundState,
    player_stood: bool,
    short_deal: bool,
}

impl Round {
    pub(crate) fn new(bet: u32) -> Round {
        Round {
            bet,
            state: RoundState::BetPlaced,
            player_stood: false,
            short_deal: false,
        }
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn player_stood(&self) -> bool {
        self.player_stood
    }

    /// True if the deck ran out before both hands held two cards. Such a round is a push.
    pub fn short_deal(&self) -> bool {
        self.short_deal
    }

    pub(crate) fn enter(&mut self, state: RoundState) {
        debug!("round {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub(crate) fn stand(&mut self) {
        self.player_stood = true;
    }

    pub(crate) fn void(&mut self) {
        self.short_deal = true;
        self.player_stood = true;
    }

    /// Returns an `InvalidState` error unless the round is in one of `states`.
    pub(crate) fn require_state(
        &self,
        states: &[RoundState],
        expected: &'static str,
    ) -> Result<(), BlackjackGameError> {
        if states.contains(&self.state) {
            Ok(())
        } else {
            Err(BlackjackGameError::InvalidState {
                expected,
                found: self.state,
            })
        }
    }
}

/// Everything worth reporting about a resolved round. The hands are captured before the
/// table clears them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub bet: u32,
    pub balance_change: i64,
    pub balance: u32,
    pub player_cards: Vec<Card>,
    pub player_total: u32,
    pub dealer_cards: Vec<Card>,
    pub dealer_total: u32,
}

/// Events reported to the player interface while a round is played.
#[derive(Debug, Clone, Copy)]
pub enum RoundEvent<'a> {
    /// A new round is about to ask for a bet.
    RoundStarting { balance: u32, cards_remaining: usize },
    /// The bet was refused, the player is asked again.
    BetRejected { reason: &'a BlackjackGameError },
    /// The initial cards are on the table.
    Dealt { player: &'a Hand, dealer: &'a Hand },
    /// The dealer is at or below the draw threshold and takes another card.
    DealerWillDraw { total: u32 },
    DealerDrew { card: Card, total: u32 },
    PlayerDrew { card: Card, total: u32 },
    /// The deck ran out, whoever was drawing stands.
    DeckExhausted,
    Resolved { result: &'a RoundResult },
}

/// The seam between the round engine and whoever plays the player's seat, a person at
/// a terminal or an automated strategy.
pub trait PlayerInterface {
    /// Asks for a bet. Recoverable errors make the round ask again.
    fn bet(&mut self, balance: u32, min_bet: u32) -> Result<u32, BlackjackGameError>;

    /// Asks whether the player draws another card at `total`.
    fn wants_card(&mut self, total: u32) -> Result<bool, BlackjackGameError>;

    /// Reports an event. Purely presentational, may block for acknowledgement.
    fn notify(&mut self, event: RoundEvent<'_>) -> Result<(), BlackjackGameError>;
}

/// Asks `interface` for bets until one is accepted by `table`.
pub fn take_bet<S: CardSource, I: PlayerInterface>(
    table: &Table<S>,
    interface: &mut I,
) -> Result<Round, BlackjackGameError> {
    loop {
        let attempt = interface
            .bet(table.player().balance(), table.config().min_bet)
            .and_then(|bet| table.place_bet(bet));
        match attempt {
            Ok(round) => return Ok(round),
            Err(e) if e.is_recoverable() => {
                debug!("bet rejected: {}", e);
                interface.notify(RoundEvent::BetRejected { reason: &e })?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Plays one full round at `table`: bet, initial deal, dealer draws, player draws and
/// resolution.
pub fn play_round<S: CardSource, I: PlayerInterface>(
    table: &mut Table<S>,
    interface: &mut I,
) -> Result<RoundResult, BlackjackGameError> {
    let mut round = take_bet(table, interface)?;

    let complete = table.deal_initial(&mut round)?;
    if !complete {
        interface.notify(RoundEvent::DeckExhausted)?;
    }
    interface.notify(RoundEvent::Dealt {
        player: table.player().hand(),
        dealer: table.dealer().hand(),
    })?;

    if complete {
        dealer_draws(table, &mut round, interface)?;
        player_draws(table, &mut round, interface)?;
    }

    let result = table.resolve(&mut round)?;
    interface.notify(RoundEvent::Resolved { result: &result })?;
    Ok(result)
}

fn dealer_draws<S: CardSource, I: PlayerInterface>(
    table: &mut Table<S>,
    round: &mut Round,
    interface: &mut I,
) -> Result<(), BlackjackGameError> {
    loop {
        if table.dealer_must_draw() {
            interface.notify(RoundEvent::DealerWillDraw {
                total: table.dealer().total(),
            })?;
        }
        match table.dealer_step(round)? {
            DealerStep::Drew(card) => interface.notify(RoundEvent::DealerDrew {
                card,
                total: table.dealer().total(),
            })?,
            DealerStep::Stood => return Ok(()),
            DealerStep::DeckExhausted => return interface.notify(RoundEvent::DeckExhausted),
        }
    }
}

fn player_draws<S: CardSource, I: PlayerInterface>(
    table: &mut Table<S>,
    round: &mut Round,
    interface: &mut I,
) -> Result<(), BlackjackGameError> {
    while table.player_can_draw(round) {
        if !interface.wants_card(table.player().total())? {
            return table.player_stand(round);
        }
        match table.player_hit(round)? {
            Some(card) => interface.notify(RoundEvent::PlayerDrew {
                card,
                total: table.player().total(),
            })?,
            None => {
                interface.notify(RoundEvent::DeckExhausted)?;
                table.player_stand(round)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::config::GameConfig;
    use crate::deck::StackedDeck;
    use crate::outcome::OutcomeCategory;
    use std::collections::VecDeque;

    /// Interface that replays scripted answers and records what it was told.
    #[derive(Default)]
    pub(crate) struct ScriptedPlayer {
        pub bets: VecDeque<Result<u32, BlackjackGameError>>,
        pub hits: VecDeque<bool>,
        pub rejected_bets: usize,
        pub dealer_draws: usize,
        pub player_draws: usize,
        pub exhausted: usize,
        pub dealt: usize,
    }

    impl ScriptedPlayer {
        pub(crate) fn new(bets: &[u32], hits: &[bool]) -> Self {
            ScriptedPlayer {
                bets: bets.iter().map(|&b| Ok(b)).collect(),
                hits: hits.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl PlayerInterface for ScriptedPlayer {
        fn bet(&mut self, _balance: u32, _min_bet: u32) -> Result<u32, BlackjackGameError> {
            self.bets.pop_front().unwrap_or(Err(BlackjackGameError::InputClosed))
        }

        fn wants_card(&mut self, _total: u32) -> Result<bool, BlackjackGameError> {
            Ok(self.hits.pop_front().unwrap_or(false))
        }

        fn notify(&mut self, event: RoundEvent<'_>) -> Result<(), BlackjackGameError> {
            match event {
                RoundEvent::BetRejected { .. } => self.rejected_bets += 1,
                RoundEvent::Dealt { .. } => self.dealt += 1,
                RoundEvent::DealerDrew { .. } => self.dealer_draws += 1,
                RoundEvent::PlayerDrew { .. } => self.player_draws += 1,
                RoundEvent::DeckExhausted => self.exhausted += 1,
                _ => {}
            }
            Ok(())
        }
    }

    /// Builds a table whose deck deals `ranks` in order, player first.
    pub(crate) fn stacked_table(ranks: &[Rank]) -> Table<StackedDeck> {
        let cards = ranks.iter().map(|&r| Card::new(Suit::Diamonds, r));
        Table::new(StackedDeck::new(cards), GameConfig::default())
    }

    fn assert_cleared(table: &Table<StackedDeck>) {
        assert!(table.player().hand().is_empty());
        assert!(table.dealer().hand().is_empty());
    }

    #[test]
    fn player_twenty_beats_dealer_nineteen() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Queen, Numeral(9)]);
        let mut player = ScriptedPlayer::new(&[20], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.player_total, 20);
        assert_eq!(result.dealer_total, 19);
        assert_eq!(table.player().balance(), 120);
        assert_eq!(table.tally().wins, 1);
        assert_eq!(table.tally().total(), 1);
        assert_cleared(&table);
    }

    #[test]
    fn player_bust_loses() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Numeral(5), Numeral(8), Numeral(7)]);
        let mut player = ScriptedPlayer::new(&[30], &[true]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Bust);
        assert_eq!(result.player_total, 22);
        assert_eq!(player.player_draws, 1);
        assert_eq!(table.player().balance(), 70);
        assert_eq!(table.tally().get(OutcomeCategory::Loss), 1);
        assert_cleared(&table);
    }

    #[test]
    fn equal_totals_draw_without_moving_money() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Numeral(8), Numeral(8)]);
        let mut player = ScriptedPlayer::new(&[50], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.balance_change, 0);
        assert_eq!(table.player().balance(), 100);
        assert_eq!(table.tally().draws, 1);
        assert_cleared(&table);
    }

    #[test]
    fn standing_under_the_dealer_loses() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Numeral(7), Numeral(9)]);
        let mut player = ScriptedPlayer::new(&[10], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Loss);
        assert_eq!(table.player().balance(), 90);
        assert_eq!(table.tally().losses, 1);
    }

    #[test]
    fn dealer_busting_on_third_card_pays_double() {
        use Rank::*;
        // Dealer holds 10 + 4 = 14, must draw and busts on the king.
        let mut table = stacked_table(&[Numeral(2), Numeral(10), Numeral(3), Numeral(4), King]);
        let mut player = ScriptedPlayer::new(&[25], &[true, true]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.dealer_cards.len(), 3);
        assert_eq!(result.dealer_total, 24);
        assert_eq!(result.outcome, Outcome::DoubleWin);
        assert_eq!(result.balance_change, 50);
        assert_eq!(table.player().balance(), 150);
        // The player never gets asked once the dealer is bust.
        assert_eq!(player.hits.len(), 2);
        assert_eq!(player.dealer_draws, 1);
        assert_cleared(&table);
    }

    #[test]
    fn dealer_busting_with_four_cards_pays_single() {
        use Rank::*;
        let deal = [Numeral(10), Numeral(2), Numeral(7), Numeral(3), Numeral(9), King];
        let mut table = stacked_table(&deal);
        let mut player = ScriptedPlayer::new(&[10], &[]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.dealer_cards.len(), 4);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(table.player().balance(), 110);
    }

    #[test]
    fn dealer_stops_drawing_above_fourteen() {
        use Rank::*;
        let deal = [Numeral(10), Numeral(2), Numeral(7), Numeral(3), Numeral(10), Numeral(5)];
        let mut table = stacked_table(&deal);
        let mut player = ScriptedPlayer::new(&[10], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        // 2 + 3 = 5, draws the ten to 15 and stops.
        assert_eq!(result.dealer_total, 15);
        assert_eq!(result.dealer_cards.len(), 3);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(table.deck().remaining(), 1);
    }

    #[test]
    fn low_bet_is_rejected_before_dealing() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Queen, Numeral(9)]);
        let mut player = ScriptedPlayer::new(&[5, 101, 10], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(player.rejected_bets, 2);
        assert_eq!(player.dealt, 1);
        assert_eq!(result.bet, 10);
        assert_eq!(table.player().balance(), 110);
    }

    #[test]
    fn unparseable_bet_is_asked_again() {
        use Rank::*;
        let mut table = stacked_table(&[King, Numeral(10), Queen, Numeral(9)]);
        let mut player = ScriptedPlayer::new(&[], &[false]);
        player
            .bets
            .push_back(Err(BlackjackGameError::InvalidInput("ten".to_string())));
        player.bets.push_back(Ok(10));
        play_round(&mut table, &mut player).unwrap();
        assert_eq!(player.rejected_bets, 1);
    }

    #[test]
    fn closed_input_propagates() {
        let mut table = stacked_table(&[Rank::King]);
        let mut player = ScriptedPlayer::new(&[], &[]);
        let err = play_round(&mut table, &mut player).unwrap_err();
        assert!(matches!(err, BlackjackGameError::InputClosed));
        assert_eq!(table.deck().remaining(), 1);
    }

    #[test]
    fn player_stops_being_asked_at_twenty_one() {
        use Rank::*;
        let deal = [Numeral(5), Numeral(10), Numeral(6), Numeral(8), Queen];
        let mut table = stacked_table(&deal);
        let mut player = ScriptedPlayer::new(&[10], &[true, true, true]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.player_total, 21);
        assert_eq!(player.hits.len(), 2);
        assert_eq!(result.outcome, Outcome::Win);
    }

    #[test]
    fn short_initial_deal_is_a_push() {
        use Rank::*;
        // Three cards: the dealer never gets a second card.
        let mut table = stacked_table(&[Numeral(9), Numeral(4), Numeral(8)]);
        let mut player = ScriptedPlayer::new(&[100], &[true]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.balance_change, 0);
        assert_eq!(result.player_cards.len(), 2);
        assert_eq!(result.dealer_cards.len(), 1);
        assert_eq!(table.player().balance(), 100);
        assert_eq!(table.tally().draws, 1);
        // Neither seat draws after the short deal.
        assert_eq!(player.hits.len(), 1);
        assert_eq!(player.exhausted, 1);
        assert_cleared(&table);
    }

    #[test]
    fn single_card_deal_moves_no_money() {
        let mut table = stacked_table(&[Rank::Numeral(2)]);
        let mut player = ScriptedPlayer::new(&[100], &[false]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert!(result.dealer_cards.is_empty());
        assert_eq!(table.player().balance(), 100);
        assert_eq!(table.tally().wins, 0);
        assert_cleared(&table);
    }

    #[test]
    fn exhausted_deck_after_the_deal_still_resolves() {
        use Rank::*;
        // Full deal, then the dealer at 6 and the player at 17 both find the deck empty.
        let mut table = stacked_table(&[Numeral(9), Numeral(4), Numeral(8), Numeral(2)]);
        let mut player = ScriptedPlayer::new(&[10], &[true]);
        let result = play_round(&mut table, &mut player).unwrap();
        assert_eq!(result.player_total, 17);
        assert_eq!(result.dealer_total, 6);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(player.exhausted, 2);
        assert_eq!(table.tally().total(), 1);
        assert_cleared(&table);
    }
}
