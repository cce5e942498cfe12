use super::*;

/// An amount staked on one [`Outcome`].
///
/// The amount leaves the player's stake when the bet is placed, so
/// settlement only ever credits [`Bet::win_amount`] back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    amount: Chips,
    outcome: Outcome,
}

impl Bet {
    pub fn new(amount: Chips, outcome: Outcome) -> Self {
        Self { amount, outcome }
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
    /// Wager returned plus payout, truncated toward zero.
    pub fn win_amount(&self) -> Chips {
        (self.amount as f64 + self.outcome.win_amount(self.amount as f64)) as Chips
    }
    /// The wager itself. Informational only; it was debited at placement.
    pub fn lose_amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}
