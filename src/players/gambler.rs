use crate::*;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;

/// Flat bet on an outcome drawn uniformly from everything the wheel
/// offers, redrawn each round.
#[derive(Debug, Clone)]
pub struct Gambler {
    bankroll: Bankroll,
    outcomes: Vec<Outcome>,
    rng: SmallRng,
    amount: Chips,
}

impl Gambler {
    pub fn new(wheel: &Wheel, rng: SmallRng) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcomes: wheel.outcomes().cloned().collect(),
            rng,
            amount: UNIT,
        }
    }
    /// A gambler whose choices replay exactly for the same seed.
    pub fn seeded(wheel: &Wheel, seed: u64) -> Self {
        Self::new(wheel, SmallRng::seed_from_u64(seed))
    }
    /// Every outcome this player may pick from, sorted by name.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl Player for Gambler {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "Random"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        if let Some(outcome) = self.outcomes.choose(&mut self.rng).cloned() {
            table.place(Bet::new(self.amount, outcome));
            self.bankroll.debit(self.amount);
        }
        Ok(())
    }
    fn playing(&mut self, table: &Table) -> bool {
        self.bankroll.active(table.minimum()) && self.bankroll.stake() >= self.amount
    }
}
