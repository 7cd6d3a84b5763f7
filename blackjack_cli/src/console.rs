//! Terminal front end: prompts the player on one stream and prints the game on another.

use blackjack_lib::prelude::*;
use log::debug;
use std::io::{BufRead, Write};

/// A human player at a terminal.
pub struct ConsolePlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Associated function to create a new `ConsolePlayer`. With `pause` set the dealer's
    /// draws wait for the player to press enter.
    pub fn new(input: R, output: W, pause: bool) -> Self {
        ConsolePlayer {
            input,
            output,
            pause,
        }
    }

    /// Consumes the player, handing back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line, `InputClosed` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<String, BlackjackGameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BlackjackGameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn acknowledge(&mut self, message: &str) -> Result<(), BlackjackGameError> {
        if self.pause {
            self.prompt(&format!("{} (Press enter to continue)", message))?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn print_hand(&mut self, owner: &str, hand: &Hand) -> Result<(), BlackjackGameError> {
        writeln!(self.output, "The {} cards: ", owner)?;
        for card in hand.cards() {
            writeln!(self.output, "{}", card)?;
        }
        writeln!(self.output, "The {} card value: {}", owner, hand.total())?;
        Ok(())
    }

    fn print_result(&mut self, result: &RoundResult) -> Result<(), BlackjackGameError> {
        let message = match result.outcome {
            Outcome::DoubleWin => {
                "Congrats! You won this round, you have won double your monies.".to_string()
            }
            Outcome::Win => "Congrats! You won this round.".to_string(),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::Bust => format!(
                "Your card value is greater than 21! You lost {}.",
                result.bet
            ),
            Outcome::Loss => format!(
                "The dealer's {} beats your {}. You lost {}.",
                result.dealer_total, result.player_total, result.bet
            ),
        };
        let dealer_cards = join_cards(&result.dealer_cards);
        let player_cards = join_cards(&result.player_cards);
        writeln!(
            self.output,
            "Dealer: {} ({})",
            dealer_cards, result.dealer_total
        )?;
        writeln!(
            self.output,
            "You: {} ({})",
            player_cards, result.player_total
        )?;
        writeln!(self.output, "{}", message)?;
        writeln!(self.output, "You now have {}.", result.balance)?;
        writeln!(self.output)?;
        Ok(())
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Only `y` or `yes` draws a card, anything else stands.
fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

impl<R: BufRead, W: Write> PlayerInterface for ConsolePlayer<R, W> {
    fn bet(&mut self, balance: u32, min_bet: u32) -> Result<u32, BlackjackGameError> {
        let answer = self.prompt(&format!(
            "You currently have {}. How much would you like to bet? (Minimum bet is {}): ",
            balance, min_bet
        ))?;
        answer.parse::<u32>().map_err(|_| {
            BlackjackGameError::InvalidInput(format!("'{}' is not a whole number", answer))
        })
    }

    fn wants_card(&mut self, total: u32) -> Result<bool, BlackjackGameError> {
        let prompt = format!(
            "Your current card value is {}. Would you like to draw a card? (y/n): ",
            total
        );
        // End of input stands, so the round is settled before the session stops.
        let answer = match self.prompt(&prompt) {
            Err(BlackjackGameError::InputClosed) => String::new(),
            answer => answer?,
        };
        let hit = is_affirmative(&answer);
        debug!("player answered {:?}, hit: {}", answer, hit);
        Ok(hit)
    }

    fn notify(&mut self, event: RoundEvent<'_>) -> Result<(), BlackjackGameError> {
        match event {
            RoundEvent::RoundStarting {
                cards_remaining, ..
            } => writeln!(self.output, "The deck currently has: {}", cards_remaining)?,
            RoundEvent::BetRejected { reason } => {
                writeln!(self.output, "Invalid amount. Try again. ({})", reason)?
            }
            RoundEvent::Dealt { player, dealer } => {
                self.print_hand("dealer's", dealer)?;
                self.print_hand("user's", player)?;
            }
            RoundEvent::DealerWillDraw { total } => self.acknowledge(&format!(
                "The dealer's card value is {}, so the dealer picks a card out of the deck.",
                total
            ))?,
            RoundEvent::DealerDrew { card, total } => {
                writeln!(self.output, "The dealer drew out {}", card)?;
                self.acknowledge(&format!("The dealer's new card value is {}.", total))?;
            }
            RoundEvent::PlayerDrew { card, .. } => {
                writeln!(self.output, "You picked a(n) {}", card)?
            }
            RoundEvent::DeckExhausted => {
                writeln!(self.output, "The deck is out of cards, no more cards are drawn.")?
            }
            RoundEvent::Resolved { result } => self.print_result(result)?,
        }
        Ok(())
    }
}

/// Writes the end of game record.
pub fn write_report<W: Write>(out: &mut W, report: &SessionReport) -> std::io::Result<()> {
    if report.ended_early {
        writeln!(out)?;
    }
    writeln!(out, "The end! Here is your record.")?;
    for (category, count) in report.tally.iter() {
        writeln!(out, "{}: {}", category, count)?;
    }
    writeln!(
        out,
        "Your money at the end of the game: {}",
        report.final_balance
    )?;
    Ok(())
}
