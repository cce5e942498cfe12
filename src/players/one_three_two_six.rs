use super::*;
use crate::*;

/// The 1-3-2-6 system on Red, driven by a [`Progression`].
#[derive(Debug, Clone)]
pub struct OneThreeTwoSix {
    bankroll: Bankroll,
    outcome: Outcome,
    state: Progression,
}

impl OneThreeTwoSix {
    pub fn new() -> Self {
        Self::from(Outcome::even("Red"))
    }
    pub fn state(&self) -> Progression {
        self.state
    }
}

impl From<Outcome> for OneThreeTwoSix {
    fn from(outcome: Outcome) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome,
            state: Progression::NoWins,
        }
    }
}

impl Default for OneThreeTwoSix {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for OneThreeTwoSix {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "1326"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        let bet = self.state.bet(&self.outcome);
        self.bankroll.debit(bet.amount());
        table.place(bet);
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll.credit(bet.win_amount());
        self.state = self.state.next(Resolution::Win);
    }
    fn lose(&mut self, _: &Bet) {
        self.state = self.state.next(Resolution::Lose);
    }
    fn restart(&mut self) {
        self.state = Progression::NoWins;
    }
    fn playing(&mut self, table: &Table) -> bool {
        if self.bankroll.active(table.minimum()) && self.bankroll.stake() >= self.state.multiplier() {
            true
        } else {
            self.restart();
            false
        }
    }
}
