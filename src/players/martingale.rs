use crate::*;

/// Doubles the bet on Black after every loss and drops back to one unit
/// on a win. Always bets `2^losses`.
///
/// Exponential growth can outrun the table limit, so this is the one
/// strategy that validates its own placement. A rejected bet resets the
/// progression before the failure is passed up.
#[derive(Debug, Clone)]
pub struct Martingale {
    bankroll: Bankroll,
    outcome: Outcome,
    losses: u32,
    multiple: Chips,
}

impl Martingale {
    pub fn new() -> Self {
        Self::from(Outcome::even("Black"))
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    /// Current bet size, always `2^losses`.
    pub fn multiple(&self) -> Chips {
        self.multiple
    }
}

impl From<Outcome> for Martingale {
    fn from(outcome: Outcome) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome,
            losses: 0,
            multiple: 1,
        }
    }
}

impl Default for Martingale {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Martingale {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "Martingale"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        table.place(Bet::new(self.multiple, self.outcome.clone()));
        if let Err(e) = table.validate() {
            log::debug!("martingale overran the table at {} after {} losses", self.multiple, self.losses);
            self.restart();
            return Err(e);
        }
        self.bankroll.debit(self.multiple);
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll.credit(bet.win_amount());
        self.restart();
    }
    fn lose(&mut self, _: &Bet) {
        self.losses += 1;
        self.multiple = (2 as Chips).saturating_pow(self.losses);
    }
    fn restart(&mut self) {
        self.losses = 0;
        self.multiple = 1;
    }
    fn playing(&mut self, table: &Table) -> bool {
        if self.bankroll.active(table.minimum()) && self.bankroll.stake() >= self.multiple {
            true
        } else {
            self.restart();
            false
        }
    }
}
