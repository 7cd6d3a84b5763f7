/// Struct holding the table parameters of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_balance: u32,
    pub min_bet: u32,
    pub dealer_stands_above: u32,
}

impl GameConfig {
    /// Associated method returning a new `GameConfigBuilder`, any value left unset takes the standard default.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder {
            starting_balance: None,
            min_bet: None,
            dealer_stands_above: None,
        }
    }
}

impl Default for GameConfig {
    /// Returns the standard table: a bankroll of 100, a minimum bet of 10 and a dealer that draws through 14.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// Struct to implement builder pattern for `GameConfig`
#[derive(Debug, Clone, Copy)]
pub struct GameConfigBuilder {
    starting_balance: Option<u32>,
    min_bet: Option<u32>,
    dealer_stands_above: Option<u32>,
}

impl GameConfigBuilder {
    /// Method for changing the starting balance of the player.
    pub fn starting_balance(&mut self, balance: u32) -> &mut Self {
        self.starting_balance = Some(balance);
        self
    }

    /// Method for setting the minimum bet for the game
    pub fn min_bet(&mut self, bet: u32) -> &mut Self {
        self.min_bet = Some(bet);
        self
    }

    /// Method for setting the total the dealer keeps drawing at or below.
    pub fn dealer_stands_above(&mut self, total: u32) -> &mut Self {
        self.dealer_stands_above = Some(total);
        self
    }

    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            starting_balance: self.starting_balance.unwrap_or(100),
            min_bet: self.min_bet.unwrap_or(10),
            dealer_stands_above: self.dealer_stands_above.unwrap_or(14),
        }
    }
}
