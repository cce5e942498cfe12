use crate::*;

/// Baseline: the same flat bet on Black every round.
#[derive(Debug, Clone)]
pub struct Passenger57 {
    bankroll: Bankroll,
    outcome: Outcome,
    amount: Chips,
}

impl Passenger57 {
    pub fn new(outcome: Outcome, amount: Chips) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome,
            amount,
        }
    }
    /// One unit on the wheel's own Black outcome.
    pub fn on(wheel: &Wheel) -> Result<Self, RouletteError> {
        Ok(Self::new(wheel.outcome("Black")?, UNIT))
    }
}

impl Player for Passenger57 {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "Passenger57"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        table.place(Bet::new(self.amount, self.outcome.clone()));
        self.bankroll.debit(self.amount);
        Ok(())
    }
    fn playing(&mut self, table: &Table) -> bool {
        self.bankroll.active(table.minimum()) && self.bankroll.stake() >= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bets_black_from_the_wheel() {
        let ref wheel = Wheel::seeded(0);
        let ref mut table = Table::default();
        let ref mut player = Passenger57::on(wheel).unwrap();
        player.place(table).unwrap();
        let bet = table.iter().next().unwrap();
        assert_eq!(bet.outcome().name(), "Black");
        assert_eq!(bet.amount(), UNIT);
        assert_eq!(player.stake(), STAKE - UNIT);
    }

    #[test]
    fn win_credits_payout() {
        let ref mut player = Passenger57::new(Outcome::even("Black"), 20);
        player.win(&Bet::new(20, Outcome::even("Black")));
        assert_eq!(player.stake(), STAKE + 40);
    }
}
