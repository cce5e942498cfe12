use crate::*;
use std::collections::VecDeque;

const SEQUENCE: [Chips; 6] = [1, 2, 3, 4, 5, 6];

/// The cancellation system on Red.
///
/// Bets the sum of the first and last entries of a pending sequence. A
/// win crosses both off; a loss appends the lost amount. The player stops
/// once fewer than two entries remain, and the sequence goes back to
/// `1..=6` whenever play stops.
#[derive(Debug, Clone)]
pub struct Cancellation {
    bankroll: Bankroll,
    outcome: Outcome,
    sequence: VecDeque<Chips>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::from(Outcome::even("Red"))
    }
    pub fn sequence(&self) -> &VecDeque<Chips> {
        &self.sequence
    }
    /// Next bet, if the sequence still has two ends.
    pub fn amount(&self) -> Option<Chips> {
        match self.sequence.len() {
            0 | 1 => None,
            _ => Some(self.sequence.front()? + self.sequence.back()?),
        }
    }
}

impl From<Outcome> for Cancellation {
    fn from(outcome: Outcome) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome,
            sequence: VecDeque::from(SEQUENCE),
        }
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Cancellation {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "Cancellation"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        let Some(amount) = self.amount() else {
            log::debug!("cancellation sequence exhausted, nothing to bet");
            return Ok(());
        };
        table.place(Bet::new(amount, self.outcome.clone()));
        self.bankroll.debit(amount);
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll.credit(bet.win_amount());
        self.sequence.pop_front();
        self.sequence.pop_back();
    }
    fn lose(&mut self, bet: &Bet) {
        self.sequence.push_back(bet.amount());
    }
    fn restart(&mut self) {
        self.sequence = VecDeque::from(SEQUENCE);
    }
    fn playing(&mut self, table: &Table) -> bool {
        match self.amount() {
            Some(amount) if self.bankroll.active(table.minimum()) && self.bankroll.stake() >= amount => true,
            _ => {
                self.restart();
                false
            }
        }
    }
}
